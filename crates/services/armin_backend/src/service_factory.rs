//! Service factory implementation.
//!
//! Builds the inquiry store and the notification service from configuration
//! and hands them out behind the `armin_common::services` traits.
use armin_common::services::{BoxedError, InquiryStore, NotificationService, ServiceFactory};
use armin_config::AppConfig;
use std::sync::Arc;
#[allow(unused_imports)] // used only by certain features
use {
    armin_common::{is_database_enabled, is_email_enabled},
    armin_common::models::ContactInquiry,
    armin_common::services::{BoxFuture, NotificationResult},
    tracing::{error, info, warn},
};

#[cfg(feature = "database")]
use armin_db::{
    ContactInquiryRepository, ContactInquiryRepositoryFactory, DbClient, DbError,
    RepositoryFactory, SqlContactInquiryRepository,
};

#[cfg(feature = "email")]
use armin_email::EmailNotificationService;

/// Service factory for the backend.
///
/// A service is `None` when its runtime flag is off, its configuration
/// section is missing, its cargo feature is disabled, or it failed to start.
#[derive(Default)]
pub struct ArminServiceFactory {
    inquiry_store: Option<Arc<dyn InquiryStore<Error = BoxedError>>>,
    notification_service: Option<Arc<dyn NotificationService<Error = BoxedError>>>,
}

impl ArminServiceFactory {
    /// Create a new service factory.
    ///
    /// Initialisation failures are logged; the API then runs without that
    /// side effect.
    pub async fn new(config: Arc<AppConfig>) -> Self {
        #[allow(unused_mut)]
        let mut factory = Self::default();

        if is_database_enabled(&config) {
            #[cfg(feature = "database")]
            {
                info!("ℹ️ Initializing inquiry store...");
                match init_inquiry_store(&config).await {
                    Ok(repository) => {
                        factory.inquiry_store = Some(Arc::new(BoxedInquiryStore {
                            inner: repository,
                        }));
                        info!("✅ Inquiry store initialized.");
                    }
                    Err(e) => error!("❌ Failed to initialize inquiry store: {}", e),
                }
            }
            #[cfg(not(feature = "database"))]
            warn!("use_database is set but the backend was built without the `database` feature");
        }

        if is_email_enabled(&config) {
            #[cfg(feature = "email")]
            {
                info!("ℹ️ Initializing email notification service...");
                if let Some(email_config) = config.email.clone() {
                    match EmailNotificationService::from_config(email_config) {
                        Ok(service) => {
                            factory.notification_service =
                                Some(Arc::new(BoxedNotificationService { inner: service }));
                            info!("✅ Email notification service initialized.");
                        }
                        Err(e) => {
                            error!("❌ Failed to initialize email notification service: {}", e)
                        }
                    }
                }
            }
            #[cfg(not(feature = "email"))]
            warn!("use_email is set but the backend was built without the `email` feature");
        }

        factory
    }
}

impl ServiceFactory for ArminServiceFactory {
    fn inquiry_store(&self) -> Option<Arc<dyn InquiryStore<Error = BoxedError>>> {
        self.inquiry_store.clone()
    }

    fn notification_service(&self) -> Option<Arc<dyn NotificationService<Error = BoxedError>>> {
        self.notification_service.clone()
    }
}

#[cfg(feature = "database")]
async fn init_inquiry_store(config: &Arc<AppConfig>) -> Result<SqlContactInquiryRepository, DbError> {
    let client = DbClient::new(config).await?;
    let repository = ContactInquiryRepositoryFactory::new().create_repository(client);
    repository.init_schema().await?;
    Ok(repository)
}

// Adapters from the concrete services to the boxed-error traits

#[cfg(feature = "database")]
struct BoxedInquiryStore {
    inner: SqlContactInquiryRepository,
}

#[cfg(feature = "database")]
impl InquiryStore for BoxedInquiryStore {
    type Error = BoxedError;

    fn insert(&self, inquiry: ContactInquiry) -> BoxFuture<'_, (), Self::Error> {
        Box::pin(async move {
            self.inner
                .insert(&inquiry)
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }

    fn list(&self) -> BoxFuture<'_, Vec<ContactInquiry>, Self::Error> {
        Box::pin(async move {
            self.inner
                .find_all()
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }
}

#[cfg(feature = "email")]
struct BoxedNotificationService {
    inner: EmailNotificationService,
}

#[cfg(feature = "email")]
impl NotificationService for BoxedNotificationService {
    type Error = BoxedError;

    fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        is_html: bool,
    ) -> BoxFuture<'_, NotificationResult, Self::Error> {
        let send = self.inner.send_email(to, subject, body, is_html);
        Box::pin(async move { send.await.map_err(|e| BoxedError(Box::new(e))) })
    }
}
