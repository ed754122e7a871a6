use armin_common::services::ServiceFactory;
use armin_common::{config_error, ArminError};
use armin_config::AppConfig;
use std::sync::Arc;

use crate::service_factory::ArminServiceFactory;

/// Application state shared by the router.
#[derive(Clone)]
pub struct AppState {
    /// The configuration loaded at startup.
    pub config: Arc<AppConfig>,

    /// Access to the external services.
    pub service_factory: Arc<dyn ServiceFactory>,
}

/// Builder for AppState, mainly for wiring tests with mock services.
pub struct AppStateBuilder {
    config: Arc<AppConfig>,
    service_factory: Option<Arc<dyn ServiceFactory>>,
}

impl AppStateBuilder {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            service_factory: None,
        }
    }

    /// Set the service factory.
    pub fn with_service_factory(mut self, service_factory: Arc<dyn ServiceFactory>) -> Self {
        self.service_factory = Some(service_factory);
        self
    }

    /// Build the AppState.
    ///
    /// # Errors
    ///
    /// Fails when no service factory was set.
    pub fn build(self) -> Result<AppState, ArminError> {
        let service_factory = self
            .service_factory
            .ok_or_else(|| config_error("Service factory must be set"))?;

        Ok(AppState {
            config: self.config,
            service_factory,
        })
    }
}

impl AppState {
    pub fn builder(config: Arc<AppConfig>) -> AppStateBuilder {
        AppStateBuilder::new(config)
    }

    /// Create the AppState with the services described by `config`.
    pub async fn new(config: Arc<AppConfig>) -> Self {
        let service_factory = Arc::new(ArminServiceFactory::new(config.clone()).await);

        Self {
            config,
            service_factory,
        }
    }
}
