//! Client for the transactional email API.

use crate::error::EmailError;
use armin_common::http::client::{create_client, DEFAULT_TIMEOUT_SECS};
use armin_config::env_vars::SECRET_MARKER;
use armin_config::EmailConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Base URL used when the configuration doesn't name one
pub const DEFAULT_API_BASE_URL: &str = "https://api.resend.com";

/// Request body of `POST /emails`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

impl EmailMessage {
    /// A message with a plain-text body
    pub fn text(from: &str, to: &str, subject: &str, body: &str) -> Self {
        Self {
            from: from.to_string(),
            to: vec![to.to_string()],
            subject: subject.to_string(),
            text: Some(body.to_string()),
            html: None,
        }
    }

    /// A message with an HTML body
    pub fn html(from: &str, to: &str, subject: &str, body: &str) -> Self {
        Self {
            text: None,
            html: Some(body.to_string()),
            ..Self::text(from, to, subject, "")
        }
    }
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: String,
}

/// Client for the transactional email API
#[derive(Debug, Clone)]
pub struct EmailClient {
    client: Client,
    config: EmailConfig,
    base_url: String,
}

impl EmailClient {
    /// Create a client from the email configuration
    ///
    /// # Errors
    ///
    /// Fails when the API key or sender is empty, when the API key is still
    /// the unresolved secret marker, or when the HTTP client can't be built.
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        if config.api_key.trim().is_empty() {
            return Err(EmailError::ConfigError("API key is empty".to_string()));
        }
        if config.api_key == SECRET_MARKER {
            return Err(EmailError::ConfigError(
                "API key was not resolved from the environment".to_string(),
            ));
        }
        if config.sender.trim().is_empty() {
            return Err(EmailError::ConfigError("Sender address is empty".to_string()));
        }

        let client = create_client(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS), true)?;
        let base_url = config
            .api_base_url
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// The configured sender address
    pub fn sender(&self) -> &str {
        &self.config.sender
    }

    /// Send one message.
    ///
    /// # Returns
    ///
    /// The provider's message id
    pub async fn send(&self, message: &EmailMessage) -> Result<String, EmailError> {
        let url = format!("{}/emails", self.base_url);
        debug!("Sending email to {:?} via {}", message.to, url);

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(message)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            error!("Email API returned {}: {}", status, body);
            return Err(EmailError::ApiError {
                status_code: status.as_u16(),
                message: body,
            });
        }

        let sent: SendResponse = resp.json().await?;
        info!("Email sent to {:?} (id {})", message.to, sent.id);
        Ok(sent.id)
    }
}
