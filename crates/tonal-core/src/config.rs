use crate::app_config::{AlertSettings, AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_TRANSLATE_BASE_URL: &str = "https://translation.googleapis.com";
pub const DEFAULT_ALERT_BASE_URL: &str = "https://api.emailjs.com";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_flag = |var: &str| -> Result<bool, ConfigError> {
        match lookup(var) {
            Ok(raw) => parse_bool(&raw).ok_or_else(|| invalid(var, format!("not a boolean: {raw}"))),
            Err(_) => Ok(false),
        }
    };

    let env = parse_environment(&or_default("TONAL_ENV", "development"));
    let bind_addr = parse_addr("TONAL_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("TONAL_LOG_LEVEL", "info");
    let history_path = PathBuf::from(or_default("TONAL_HISTORY_PATH", "./data/history.json"));

    let history_max_items = parse_usize("TONAL_HISTORY_MAX_ITEMS", "100")?;
    if history_max_items == 0 {
        return Err(invalid("TONAL_HISTORY_MAX_ITEMS", "must be at least 1".to_string()));
    }

    let http_timeout_secs = parse_u64("TONAL_HTTP_TIMEOUT_SECS", "30")?;

    let auto_translate = parse_flag("TONAL_AUTO_TRANSLATE")?;
    let translate_api_key = optional("GOOGLE_TRANSLATE_API_KEY");
    let translate_base_url = or_default("TONAL_TRANSLATE_BASE_URL", DEFAULT_TRANSLATE_BASE_URL);

    let alerts = if parse_flag("TONAL_ALERTS_ENABLED")? {
        Some(AlertSettings {
            recipient_email: require("TONAL_ALERT_RECIPIENT")?,
            sender_email: optional("TONAL_ALERT_SENDER"),
            api_key: optional("EMAILJS_USER_ID"),
            service_id: or_default("TONAL_ALERT_SERVICE_ID", "default_service"),
            template_id: or_default("TONAL_ALERT_TEMPLATE_ID", "sentiment_alert"),
            base_url: or_default("TONAL_ALERT_BASE_URL", DEFAULT_ALERT_BASE_URL),
        })
    } else {
        None
    };

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        history_path,
        history_max_items,
        http_timeout_secs,
        auto_translate,
        translate_api_key,
        translate_base_url,
        alerts,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
