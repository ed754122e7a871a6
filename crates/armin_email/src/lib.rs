//! Email notifications for the Armin Shopfitting API
//!
//! Sends plain-text notifications through a Resend-style transactional email
//! API: one authenticated JSON `POST {api_base_url}/emails` per message.

pub mod client;
pub mod error;
pub mod service;

pub use client::{EmailClient, EmailMessage, DEFAULT_API_BASE_URL};
pub use error::EmailError;
pub use service::EmailNotificationService;
