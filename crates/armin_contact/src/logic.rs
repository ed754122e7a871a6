//! Contact intake: validation, side effects and listing.

use armin_common::models::ContactInquiry;
use armin_common::services::{BoxedError, InquiryStore, ServiceFactory};
use armin_common::ArminError;
use armin_config::AppConfig;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::models::ContactInquiryCreate;
use crate::notification::InquiryNotifier;
use crate::validation::validate;

/// Shared state for the contact handlers
///
/// Either side effect may be absent; the intake succeeds without them.
#[derive(Clone, Default)]
pub struct ContactState {
    pub store: Option<Arc<dyn InquiryStore<Error = BoxedError>>>,
    pub notifier: Option<InquiryNotifier>,
}

impl ContactState {
    pub fn new(
        store: Option<Arc<dyn InquiryStore<Error = BoxedError>>>,
        notifier: Option<InquiryNotifier>,
    ) -> Self {
        Self { store, notifier }
    }

    /// Wire the state from the services built at startup.
    ///
    /// Notifications go to the configured recipient; without an `email`
    /// section there is nobody to notify and the notifier is left out.
    pub fn from_services(factory: &dyn ServiceFactory, config: &AppConfig) -> Self {
        let store = factory.inquiry_store();
        let notifier = match (factory.notification_service(), config.email.as_ref()) {
            (Some(service), Some(email)) => Some(InquiryNotifier::new(service, &email.recipient)),
            (Some(_), None) => {
                warn!("Notification service available but no recipient configured");
                None
            }
            (None, _) => None,
        };

        info!(
            persistence = store.is_some(),
            notification = notifier.is_some(),
            "Contact intake configured"
        );
        Self::new(store, notifier)
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }
}

/// Accept a submission.
///
/// Validation failures are returned before any side effect runs. The insert
/// is awaited so the record is visible to a following listing; its failure
/// is logged and swallowed. The notification runs detached.
pub async fn submit_inquiry(
    state: &ContactState,
    create: ContactInquiryCreate,
) -> Result<ContactInquiry, ArminError> {
    let inquiry = ContactInquiry::from(validate(create)?);
    debug!("Accepted contact inquiry {}", inquiry.id);

    if let Some(store) = &state.store {
        if let Err(e) = store.insert(inquiry.clone()).await {
            error!("Failed to store contact inquiry {}: {}", inquiry.id, e);
        }
    }

    if let Some(notifier) = &state.notifier {
        notifier.dispatch(&inquiry);
    }

    info!("Contact inquiry {} received", inquiry.id);
    debug!("Contact inquiry {} sender: {}", inquiry.id, inquiry.email);
    Ok(inquiry)
}

/// Every stored inquiry in insertion order.
///
/// Store failures are logged and yield an empty list.
pub async fn list_inquiries(state: &ContactState) -> Vec<ContactInquiry> {
    let Some(store) = &state.store else {
        return Vec::new();
    };

    match store.list().await {
        Ok(inquiries) => inquiries,
        Err(e) => {
            error!("Failed to list contact inquiries: {}", e);
            Vec::new()
        }
    }
}
