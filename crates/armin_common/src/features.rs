//! Runtime feature switches for the Armin Shopfitting API.
//!
//! Side effects of the contact intake are switched on at runtime: each needs
//! its `use_*` flag set and its configuration section present.
//!
//! - `use_database` + `[database]`: persist inquiries and serve `GET /api/contact`
//! - `use_email` + `[email]`: email a notification for every inquiry
//!
//! Both may be enabled at once.

use armin_config::AppConfig;

/// Check if a feature is enabled at runtime based on configuration.
///
/// # Arguments
///
/// * `use_feature` - The configuration flag that enables the feature
/// * `feature_config` - The configuration section for the feature
///
/// # Returns
///
/// `true` if the feature is enabled, `false` otherwise
pub fn is_feature_enabled<T>(use_feature: bool, feature_config: Option<&T>) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if inquiry persistence is enabled.
pub fn is_database_enabled(config: &AppConfig) -> bool {
    is_feature_enabled(config.use_database, config.database.as_ref())
}

/// Check if email notifications are enabled.
pub fn is_email_enabled(config: &AppConfig) -> bool {
    is_feature_enabled(config.use_email, config.email.as_ref())
}
