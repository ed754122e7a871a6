// --- File: crates/armin_common/src/routes.rs ---

use axum::{routing::get, Router};

use crate::handlers::root_handler;

/// Creates a router containing the routes common to every deployment.
///
/// # Returns
/// A router serving the API root.
pub fn routes() -> Router {
    Router::new().route("/", get(root_handler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_root_returns_greeting() {
        let response = routes()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Armin Shopfitting API");
    }
}
