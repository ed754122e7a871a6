//! Environment variable handling for the Armin Shopfitting API.
//!
//! This module provides utilities for working with environment variables in a
//! standardized way. It includes functions for getting environment variables
//! with consistent naming patterns and for converting between different naming
//! patterns.

use std::env;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "ARMIN";

/// The prefix for secret environment variables
pub const SECRET_PREFIX: &str = "ARMIN_SECRET";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// The separator for secret environment variables
pub const SECRET_SEPARATOR: &str = "_";

/// Marker value in config files for values that must come from the environment
pub const SECRET_MARKER: &str = "secret_from_env";

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a configuration path to an environment variable name
///
/// # Arguments
///
/// * `path` - The configuration path (e.g., "server.host")
///
/// # Returns
///
/// The environment variable name (e.g., "ARMIN__SERVER__HOST")
pub fn config_path_to_env_var(path: &str) -> String {
    let prefix = get_config_prefix();
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path to an environment variable name
///
/// # Arguments
///
/// * `path` - The secret path (e.g., "email.api_key")
///
/// # Returns
///
/// The environment variable name (e.g., "ARMIN_SECRET_EMAIL_API_KEY")
pub fn secret_path_to_env_var(path: &str) -> String {
    let path = path.replace('.', SECRET_SEPARATOR);
    format!("{}{}{}", SECRET_PREFIX, SECRET_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path to its short, unprefixed environment variable name
///
/// # Arguments
///
/// * `path` - The secret path (e.g., "email.api_key")
///
/// # Returns
///
/// The environment variable name (e.g., "EMAIL_API_KEY")
pub fn legacy_secret_path_to_env_var(path: &str) -> String {
    let parts: Vec<&str> = path.split('.').collect();
    if parts.len() < 2 {
        return path.to_uppercase();
    }

    let service = parts[0];
    let key = parts[1..].join(SECRET_SEPARATOR);
    format!("{}_{}", service, key).to_uppercase()
}

/// Get an environment variable for a configuration path
pub fn get_config_env_var(path: &str) -> Option<String> {
    let env_var = config_path_to_env_var(path);
    env::var(&env_var).ok()
}

/// Get an environment variable for a secret path
///
/// Tries the prefixed name first and falls back to the short name.
pub fn get_secret_env_var(path: &str) -> Option<String> {
    let env_var = secret_path_to_env_var(path);
    if let Ok(value) = env::var(&env_var) {
        return Some(value);
    }

    let legacy_env_var = legacy_secret_path_to_env_var(path);
    env::var(&legacy_env_var).ok()
}

/// Check if a path is a secret path
///
/// Paths containing "secret", "key", "password" or "token" are considered secret.
pub fn is_secret_path(path: &str) -> bool {
    let path_lower = path.to_lowercase();
    path_lower.contains("secret")
        || path_lower.contains("key")
        || path_lower.contains("password")
        || path_lower.contains("token")
}

/// Get an environment variable for a path, secret or not
pub fn get_env_var(path: &str) -> Option<String> {
    resolve_path_with(path, |name| env::var(name).ok())
}

/// Resolves a config path against `lookup`, keyed by environment variable name.
///
/// Secret paths try `ARMIN_SECRET_*` and then the short name, other paths
/// use `ARMIN__SECTION__KEY`.
pub fn resolve_path_with<F>(path: &str, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    if is_secret_path(path) {
        lookup(&secret_path_to_env_var(path))
            .or_else(|| lookup(&legacy_secret_path_to_env_var(path)))
    } else {
        lookup(&config_path_to_env_var(path))
    }
}

/// Inject environment variables into a JSON value
///
/// Recursively replaces `"secret_from_env"` strings with values looked up by
/// `lookup`, keyed by the dotted path of the value (e.g. "email.api_key").
///
/// # Returns
///
/// `true` if any values were replaced, `false` otherwise
pub fn inject_env_vars_with<F>(value: &mut serde_json::Value, lookup: &F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    use serde_json::Value;

    fn walk<F>(path: Vec<String>, obj: &mut Value, lookup: &F) -> bool
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut replaced = false;

        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    let mut new_path = path.clone();
                    new_path.push(k.to_string());
                    replaced |= walk(new_path, v, lookup);
                }
            }
            Value::Array(arr) => {
                for (i, v) in arr.iter_mut().enumerate() {
                    let mut new_path = path.clone();
                    new_path.push(i.to_string());
                    replaced |= walk(new_path, v, lookup);
                }
            }
            Value::String(s) if s == SECRET_MARKER => {
                let path_str = path.join(".");
                if let Some(env_val) = lookup(&path_str) {
                    *s = env_val;
                    replaced = true;
                } else {
                    // The subscriber is not installed yet while configuration loads.
                    eprintln!("Warning: env var for {} not found", path_str);
                }
            }
            _ => {}
        }

        replaced
    }

    walk(vec![], value, lookup)
}

/// Inject process environment variables into a JSON value.
pub fn inject_env_vars(value: &mut serde_json::Value) -> bool {
    inject_env_vars_with(value, &get_env_var)
}
