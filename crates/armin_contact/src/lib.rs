//! Contact inquiry intake for the Armin Shopfitting API
//!
//! Validates contact-form submissions, then persists them and/or emails a
//! notification, depending on which services are configured. Side-effect
//! failures never reach the caller.
//!
//! # API Endpoints
//!
//! - `POST /contact` - Submit an inquiry
//! - `GET /contact` - List stored inquiries (persistence only)

#[cfg(feature = "openapi")]
pub mod doc;
pub mod handlers;
pub mod logic;
pub mod models;
pub mod notification;
pub mod routes;
pub mod validation;

pub use logic::{list_inquiries, submit_inquiry, ContactState};
pub use models::ContactInquiryCreate;
pub use notification::{render_notification, InquiryNotifier};
pub use routes::routes;
pub use validation::{is_valid_email, validate};

#[cfg(feature = "openapi")]
pub mod openapi {
    pub use crate::doc::ContactApiDoc;
}
