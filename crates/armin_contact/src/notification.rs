//! Email notification for new inquiries.

use armin_common::models::ContactInquiry;
use armin_common::services::{BoxedError, NotificationService};
use std::sync::Arc;
use tracing::{error, info};

/// Render an inquiry into an email subject and plain-text body.
pub fn render_notification(inquiry: &ContactInquiry) -> (String, String) {
    let subject = format!("New Contact Inquiry from {}", inquiry.name);
    let body = format!(
        "You have received a new contact inquiry.\n\n\
         Name: {}\n\
         Email: {}\n\
         Phone: {}\n\
         Service: {}\n\n\
         Message:\n{}\n\n\
         Inquiry ID: {}\n\
         Received: {}\n",
        inquiry.name,
        inquiry.email,
        inquiry.phone.as_deref().unwrap_or("Not provided"),
        inquiry.service,
        inquiry.message,
        inquiry.id,
        inquiry.created_at.to_rfc3339(),
    );
    (subject, body)
}

/// Sends inquiry notifications to the site owner.
#[derive(Clone)]
pub struct InquiryNotifier {
    service: Arc<dyn NotificationService<Error = BoxedError>>,
    recipient: String,
}

impl InquiryNotifier {
    pub fn new(
        service: Arc<dyn NotificationService<Error = BoxedError>>,
        recipient: impl Into<String>,
    ) -> Self {
        Self {
            service,
            recipient: recipient.into(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Send the notification on a detached task. The outcome is only logged.
    pub fn dispatch(&self, inquiry: &ContactInquiry) {
        let (subject, body) = render_notification(inquiry);
        let service = Arc::clone(&self.service);
        let recipient = self.recipient.clone();
        let inquiry_id = inquiry.id.clone();

        tokio::spawn(async move {
            match service.send_email(&recipient, &subject, &body, false).await {
                Ok(result) => info!(
                    "Notification for inquiry {} sent to {} (id {})",
                    inquiry_id, recipient, result.id
                ),
                Err(e) => error!(
                    "Failed to send notification for inquiry {}: {}",
                    inquiry_id, e
                ),
            }
        });
    }
}
