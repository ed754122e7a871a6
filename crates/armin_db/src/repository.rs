//! Repository traits for database access
//!
//! This module defines the factory trait used to build repositories on top of
//! a database client, keeping callers agnostic of the concrete backend.

/// A trait for database repository factories
///
/// This trait defines a factory for creating repository instances.
/// It is generic over the repository type and the configuration type.
pub trait RepositoryFactory<R, C> {
    /// Create a new repository instance
    ///
    /// # Arguments
    ///
    /// * `config` - The configuration for the repository
    ///
    /// # Returns
    ///
    /// A new repository instance
    fn create_repository(&self, config: C) -> R;
}
