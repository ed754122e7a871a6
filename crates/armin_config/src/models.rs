// --- File: crates/armin_config/src/models.rs ---

use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8001;

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

// --- Database Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g. sqlite://data/ loaded via ARMIN__DATABASE__URL or DATABASE_URL
    #[serde(default)]
    pub name: Option<String>, // DB_NAME
}

impl DatabaseConfig {
    /// Resolve the URL the pool should connect to.
    ///
    /// A URL ending in `/` names a server or directory rather than a database;
    /// in that case the configured database name is appended (with a `.db`
    /// extension for SQLite files).
    pub fn connection_url(&self) -> String {
        match self.name.as_deref().filter(|n| !n.is_empty()) {
            Some(name) if self.url.ends_with('/') => {
                if self.url.starts_with("sqlite:") {
                    format!("{}{}.db", self.url, name)
                } else {
                    format!("{}{}", self.url, name)
                }
            }
            _ => self.url.clone(),
        }
    }
}

// --- Email Config ---
// Holds the transactional email provider settings. The API key is a secret and
// is normally injected from EMAIL_API_KEY or ARMIN_SECRET_EMAIL_API_KEY.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EmailConfig {
    pub api_key: String,
    pub sender: String,    // SENDER_EMAIL
    pub recipient: String, // RECIPIENT_EMAIL
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

// --- CORS Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl CorsConfig {
    /// `true` when any origin may call the API.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o.trim() == "*")
    }
}

// --- Logging Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for daily rolling log files; stdout only when unset.
    #[serde(default)]
    pub directory: Option<String>,
    #[serde(default)]
    pub journald: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
            journald: false,
        }
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_database: bool,
    #[serde(default)]
    pub use_email: bool,

    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub email: Option<EmailConfig>,
}
