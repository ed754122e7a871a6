use axum::{routing::get, Router};

use crate::handlers::{list_projects_handler, list_testimonials_handler};

/// Create the catalog routes.
///
/// The routes are stateless; they can be merged into any router.
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/projects", get(list_projects_handler))
        .route("/testimonials", get(list_testimonials_handler))
}
