use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Credentials are optional: an absent key switches the matching capability
/// off rather than failing the load. Blank values count as absent.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional_secret = |var: &str| -> Option<String> {
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

    let parse_f32 = |var: &str, default: &str| -> Result<f32, ConfigError> {
        or_default(var, default)
            .parse::<f32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(invalid(var, format!("expected a boolean, got '{other}'"))),
        }
    };

    let bind_addr = parse_addr("BIZSCOUT_BIND_ADDR", "0.0.0.0:4000")?;
    let log_level = or_default("BIZSCOUT_LOG_LEVEL", "info");

    let places_api_key = optional_secret("GOOGLE_MAPS_API_KEY");
    let gemini_api_key = optional_secret("GOOGLE_GEMINI_API_KEY");
    let gemini_model = or_default("BIZSCOUT_GEMINI_MODEL", "gemini-2.5-flash");

    let model_temperature = parse_f32("BIZSCOUT_MODEL_TEMPERATURE", "0.1")?;
    if !(0.0..=2.0).contains(&model_temperature) {
        return Err(invalid(
            "BIZSCOUT_MODEL_TEMPERATURE",
            format!("{model_temperature} is outside 0.0..=2.0"),
        ));
    }

    let website_discovery = parse_bool("BIZSCOUT_WEBSITE_DISCOVERY", "true")?;
    let places_timeout_secs = parse_u64("BIZSCOUT_PLACES_TIMEOUT_SECS", "15")?;
    let model_timeout_secs = parse_u64("BIZSCOUT_MODEL_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "BIZSCOUT_USER_AGENT",
        "bizscout/0.1 (local-business-discovery)",
    );

    Ok(AppConfig {
        bind_addr,
        log_level,
        places_api_key,
        gemini_api_key,
        gemini_model,
        model_temperature,
        website_discovery,
        places_timeout_secs,
        model_timeout_secs,
        user_agent,
    })
}
