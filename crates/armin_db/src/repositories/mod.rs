//! Repository modules for database access
//!
//! This module contains repository traits and implementations for the
//! collections the API stores.

pub mod contact_inquiry;
pub mod contact_inquiry_factory;
pub mod contact_inquiry_sql;

// Re-export the contact inquiry repository and factory for ease of use
pub use contact_inquiry::{ContactInquiry, ContactInquiryRepository};
pub use contact_inquiry_factory::ContactInquiryRepositoryFactory;
pub use contact_inquiry_sql::SqlContactInquiryRepository;
