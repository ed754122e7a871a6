//! Repository for contact inquiries
//!
//! This module provides a generic interface for the append-only collection of
//! contact inquiries.

use crate::error::DbError;

// Re-export ContactInquiry from armin_common for convenience
pub use armin_common::models::ContactInquiry;

/// Repository for contact inquiries
///
/// There is deliberately no update or delete operation.
pub trait ContactInquiryRepository {
    /// Initialize the database schema
    ///
    /// Creates the `contact_inquiries` collection if it doesn't already exist.
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Append an inquiry to the collection
    ///
    /// # Arguments
    ///
    /// * `inquiry` - The inquiry to store; its `id` becomes the document key
    fn insert(
        &self,
        inquiry: &ContactInquiry,
    ) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Find all inquiries
    ///
    /// # Returns
    ///
    /// Every stored inquiry in insertion order, without storage-internal keys
    fn find_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ContactInquiry>, DbError>> + Send;
}
