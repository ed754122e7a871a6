use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single rejected input field, reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Name of the offending field in the request body
    pub field: String,
    /// Human readable reason
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The base error type for all Armin API errors.
///
/// Each crate can extend this by implementing From<SpecificError> for ArminError.
#[derive(Error, Debug)]
pub enum ArminError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The request body did not match the expected schema
    #[error("Request validation failed: {message}")]
    SchemaValidation {
        message: String,
        details: Vec<FieldError>,
    },

    /// Error occurred during database operation
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ArminError {
    /// Field-level details, present only for schema validation failures.
    pub fn details(&self) -> &[FieldError] {
        match self {
            ArminError::SchemaValidation { details, .. } => details,
            _ => &[],
        }
    }
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for ArminError {
    fn status_code(&self) -> u16 {
        match self {
            ArminError::HttpError(_) => 500,
            ArminError::ParseError(_) => 400,
            ArminError::ConfigError(_) => 500,
            ArminError::SchemaValidation { .. } => 422,
            ArminError::DatabaseError(_) => 500,
            ArminError::ExternalServiceError { .. } => 502,
            ArminError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, ArminError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, ArminError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, ArminError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| ArminError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, ArminError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| ArminError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Common error conversions
impl From<reqwest::Error> for ArminError {
    fn from(err: reqwest::Error) -> Self {
        ArminError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for ArminError {
    fn from(err: serde_json::Error) -> Self {
        ArminError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for ArminError {
    fn from(err: std::io::Error) -> Self {
        ArminError::InternalError(err.to_string())
    }
}

impl From<armin_config::ConfigLoadError> for ArminError {
    fn from(err: armin_config::ConfigLoadError) -> Self {
        ArminError::ConfigError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> ArminError {
    ArminError::ConfigError(message.to_string())
}

pub fn schema_validation_error<T: fmt::Display>(message: T, details: Vec<FieldError>) -> ArminError {
    ArminError::SchemaValidation {
        message: message.to_string(),
        details,
    }
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> ArminError {
    ArminError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}
