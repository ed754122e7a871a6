use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tracing::info;

use crate::handlers::{create_inquiry_handler, list_inquiries_handler};
use crate::logic::ContactState;

/// Create the contact routes.
///
/// `GET /contact` is only mounted when inquiries are persisted.
pub fn routes(state: Arc<ContactState>) -> Router {
    let contact = if state.has_store() {
        post(create_inquiry_handler).get(list_inquiries_handler)
    } else {
        post(create_inquiry_handler)
    };

    info!(listing = state.has_store(), "Contact routes initialized");

    Router::new().route("/contact", contact).with_state(state)
}
