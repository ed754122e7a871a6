//! Portfolio and testimonials for the Armin Shopfitting API
//!
//! Both collections are fixed at compile time and served read-only.
//!
//! # API Endpoints
//!
//! - `GET /projects` - The project portfolio
//! - `GET /testimonials` - Client testimonials

pub mod data;
#[cfg(feature = "openapi")]
pub mod doc;
pub mod handlers;
pub mod models;
pub mod routes;

pub use data::{projects, testimonials};
pub use models::{Project, Testimonial};
pub use routes::routes;

#[cfg(feature = "openapi")]
pub mod openapi {
    pub use crate::doc::CatalogApiDoc;
}
