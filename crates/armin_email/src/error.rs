use armin_common::{external_service_error, ArminError};
use thiserror::Error;

/// Errors that can occur when sending email
#[derive(Error, Debug)]
pub enum EmailError {
    /// The request never got a response (connect error, timeout, ...)
    #[error("Email API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("Email API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Missing or incomplete email configuration
    #[error("Email configuration error: {0}")]
    ConfigError(String),
}

impl From<EmailError> for ArminError {
    fn from(err: EmailError) -> Self {
        match err {
            EmailError::ConfigError(msg) => ArminError::ConfigError(msg),
            other => external_service_error("email", other),
        }
    }
}
