use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

pub mod env_vars;
pub mod models;
pub use config::ConfigError as ConfigLoadError;
pub use models::*;

/// Loads the application configuration.
///
/// Sources, later ones winning:
/// 1. `config/default` and `config/{RUN_ENV}` (any format the `config` crate reads)
/// 2. `ARMIN__SECTION__KEY` environment variables
/// 3. `"secret_from_env"` markers resolved from `ARMIN_SECRET_*` / `SECTION_KEY`
/// 4. the plain deployment variables (`DATABASE_URL`, `DB_NAME`, `CORS_ORIGINS`, ...)
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let config_dir = PathBuf::from(env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string()));
    let vars: HashMap<String, String> = env::vars().collect();

    load_config_from(&config_dir, &run_env, &vars)
}

/// Loads the configuration from `config_dir` with `vars` as the environment.
pub fn load_config_from(
    config_dir: &Path,
    run_env: &str,
    vars: &HashMap<String, String>,
) -> Result<AppConfig, ConfigError> {
    let prefix = env_vars::get_config_prefix();
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(run_env);
    let lookup = |key: &str| vars.get(key).cloned();

    let environment: config::Map<String, String> = vars
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    let builder = Config::builder()
        .set_default("server.host", DEFAULT_HOST)?
        .set_default("server.port", i64::from(DEFAULT_PORT))?
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix(&prefix)
                .prefix_separator(env_vars::CONFIG_SEPARATOR)
                .separator(env_vars::CONFIG_SEPARATOR)
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins")
                .try_parsing(true)
                .source(Some(environment)),
        );

    let mut raw: serde_json::Value = builder.build()?.try_deserialize()?;
    env_vars::inject_env_vars_with(&mut raw, &|path: &str| {
        env_vars::resolve_path_with(path, lookup)
    });

    let mut config: AppConfig = serde_json::from_value(raw)
        .map_err(|err| ConfigError::Message(format!("failed to parse config: {err}")))?;
    apply_deployment_env_overrides(&mut config, lookup);
    Ok(config)
}

/// Applies the plain deployment environment variables.
///
/// `DATABASE_URL` (or `MONGO_URL`) and `DB_NAME` configure and enable the
/// inquiry store, `EMAIL_API_KEY` + `SENDER_EMAIL` + `RECIPIENT_EMAIL`
/// configure and enable notifications, and `CORS_ORIGINS` is a comma separated
/// origin list.
pub fn apply_deployment_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let database_url = lookup("DATABASE_URL").or_else(|| lookup("MONGO_URL"));
    if let Some(url) = database_url {
        let name = lookup("DB_NAME")
            .or_else(|| config.database.as_ref().and_then(|db| db.name.clone()));
        config.database = Some(DatabaseConfig { url, name });
        config.use_database = true;
    } else if let (Some(name), Some(db)) = (lookup("DB_NAME"), config.database.as_mut()) {
        db.name = Some(name);
    }

    if let Some(origins) = lookup("CORS_ORIGINS") {
        let origins: Vec<String> = origins
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();
        if !origins.is_empty() {
            config.cors.allowed_origins = origins;
        }
    }

    let api_key = lookup("EMAIL_API_KEY");
    let sender = lookup("SENDER_EMAIL");
    let recipient = lookup("RECIPIENT_EMAIL");
    let complete = api_key.is_some() && sender.is_some() && recipient.is_some();

    match config.email.as_mut() {
        Some(email) => {
            if let Some(api_key) = api_key {
                email.api_key = api_key;
            }
            if let Some(sender) = sender {
                email.sender = sender;
            }
            if let Some(recipient) = recipient {
                email.recipient = recipient;
            }
        }
        None => {
            if let (Some(api_key), Some(sender), Some(recipient)) = (api_key, sender, recipient) {
                config.email = Some(EmailConfig {
                    api_key,
                    sender,
                    recipient,
                    api_base_url: None,
                    timeout_secs: None,
                });
            }
        }
    }

    if complete {
        config.use_email = true;
    }
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The path is taken from `DOTENV_OVERRIDE`, else from a first command line
/// argument starting with `.env`, else `.env`. Loading happens at most once
/// per process; a missing file is not an error.
///
/// Returns the path that was (or would have been) loaded.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
