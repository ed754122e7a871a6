//! HTTP API for the Armin Shopfitting marketing site.
//!
//! Wires the feature crates into one router under `/api` and builds the
//! external services from configuration at startup.

pub mod app_state;
pub mod router;
pub mod service_factory;

pub use app_state::{AppState, AppStateBuilder};
pub use router::build_router;
pub use service_factory::ArminServiceFactory;
