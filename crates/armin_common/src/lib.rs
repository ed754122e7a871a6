// --- File: crates/armin_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod features; // Runtime feature switches
pub mod handlers; // HTTP request handlers
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Data structures and models
pub mod routes; // Route definitions
pub mod services; // Service abstractions

// Re-export the routes function to be used by the main backend service
pub use routes::routes;

// Re-export error types and utilities for easier access
pub use error::{
    config_error, external_service_error, schema_validation_error, ArminError, Context,
    FieldError, HttpStatusCode,
};

// Re-export HTTP utilities for easier access
pub use http::{client::create_client, IntoHttpResponse};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_config, init_with_level};

// Re-export feature flag handling utilities for easier access
pub use features::{is_database_enabled, is_email_enabled, is_feature_enabled};
