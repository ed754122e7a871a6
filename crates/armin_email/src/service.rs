use crate::client::{EmailClient, EmailMessage};
use crate::error::EmailError;
use armin_common::services::{BoxFuture, NotificationResult, NotificationService};
use armin_config::EmailConfig;

/// Email-backed notification service
pub struct EmailNotificationService {
    client: EmailClient,
}

impl EmailNotificationService {
    pub fn new(client: EmailClient) -> Self {
        Self { client }
    }

    /// Build the service straight from the email configuration
    pub fn from_config(config: EmailConfig) -> Result<Self, EmailError> {
        Ok(Self::new(EmailClient::new(config)?))
    }
}

impl NotificationService for EmailNotificationService {
    type Error = EmailError;

    fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        is_html: bool,
    ) -> BoxFuture<'_, NotificationResult, Self::Error> {
        let sender = self.client.sender();
        let message = if is_html {
            EmailMessage::html(sender, to, subject, body)
        } else {
            EmailMessage::text(sender, to, subject, body)
        };

        Box::pin(async move {
            let id = self.client.send(&message).await?;
            Ok(NotificationResult {
                id,
                status: "sent".to_string(),
            })
        })
    }
}
