use axum::Json;
use tracing::debug;

use crate::data;
use crate::models::{Project, Testimonial};

/// `GET /projects`
#[axum::debug_handler]
pub async fn list_projects_handler() -> Json<&'static [Project]> {
    debug!("Serving project portfolio");
    Json(data::projects())
}

/// `GET /testimonials`
#[axum::debug_handler]
pub async fn list_testimonials_handler() -> Json<&'static [Testimonial]> {
    debug!("Serving testimonials");
    Json(data::testimonials())
}
