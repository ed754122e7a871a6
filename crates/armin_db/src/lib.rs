//! Persistence for the Armin Shopfitting API
//!
//! This crate provides a database client that is designed to be database agnostic,
//! using SQLx as the underlying database library, and the repository for the
//! `contact_inquiries` collection. SQLite, PostgreSQL and MySQL are selected
//! through feature flags.
//!
//! Inquiries are stored as JSON documents keyed by their `id`, in insertion
//! order.
//!
//! # Example
//!
//! ```rust,no_run
//! use armin_db::{ContactInquiryRepository, DbClient, SqlContactInquiryRepository};
//!
//! async fn setup() -> Result<SqlContactInquiryRepository, armin_db::error::DbError> {
//!     let client = DbClient::from_url("sqlite:data/armin.db").await?;
//!     let repository = SqlContactInquiryRepository::new(client);
//!     repository.init_schema().await?;
//!     Ok(repository)
//! }
//! ```

pub mod client;
pub mod error;
pub mod repositories;
pub mod repository;

pub use client::{DbBackend, DbClient};
pub use error::DbError;
pub use repository::RepositoryFactory;

pub use repositories::{
    ContactInquiry, ContactInquiryRepository, ContactInquiryRepositoryFactory,
    SqlContactInquiryRepository,
};
