// --- File: crates/armin_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! This module provides trait definitions for the external collaborators of the
//! API: the inquiry store and the notification service. Handlers depend on
//! these traits only, so tests can swap in in-memory implementations.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::models::ContactInquiry;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A trait for the contact inquiry collection.
///
/// The collection is append-only: there is no update or delete.
pub trait InquiryStore: Send + Sync {
    /// Error type returned by store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Append an inquiry to the collection.
    fn insert(&self, inquiry: ContactInquiry) -> BoxFuture<'_, (), Self::Error>;

    /// Every stored inquiry, in insertion order.
    fn list(&self) -> BoxFuture<'_, Vec<ContactInquiry>, Self::Error>;
}

/// A trait for notification service operations.
pub trait NotificationService: Send + Sync {
    /// Error type returned by notification service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send an email notification.
    fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        is_html: bool,
    ) -> BoxFuture<'_, NotificationResult, Self::Error>;
}

/// A factory for creating service instances.
///
/// Services are built once at startup; `None` means the side effect is
/// disabled for this deployment.
pub trait ServiceFactory: Send + Sync {
    /// Get the inquiry store, if persistence is enabled.
    fn inquiry_store(&self) -> Option<Arc<dyn InquiryStore<Error = BoxedError>>>;

    /// Get a notification service instance, if notifications are enabled.
    fn notification_service(&self) -> Option<Arc<dyn NotificationService<Error = BoxedError>>>;
}

/// Represents the result of a notification operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResult {
    /// The provider's ID of the notification.
    pub id: String,
    /// The status of the notification.
    pub status: String,
}
