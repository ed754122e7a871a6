// --- File: crates/armin_common/src/handlers.rs ---

// HTTP request handlers shared by the whole API.

use axum::Json;

use crate::models::RootMessage;

/// Greeting returned by the API root.
pub const API_ROOT_MESSAGE: &str = "Armin Shopfitting API";

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API greeting", body = RootMessage)
    ),
    tag = "Armin"
))]
pub async fn root_handler() -> Json<RootMessage> {
    Json(RootMessage {
        message: API_ROOT_MESSAGE.to_string(),
    })
}
