// src/config/mod.rs
// All runtime settings come from the environment (a .env file is honored).
// The config is built once in main and handed to AppState explicitly so
// tests can construct their own.

use std::str::FromStr;

/// Name reported by the health endpoint.
pub const SERVICE_NAME: &str = "Email Classifier API";

#[derive(Debug, Clone)]
pub struct TriageConfig {
    // ── Anthropic Configuration
    pub anthropic_api_key: String,
    pub model: String,
    pub max_tokens: u32,

    // ── Upload Configuration
    pub upload_dir: String,

    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── Logging Configuration
    pub log_level: String,
}

// Handles values with trailing comments and extra whitespace.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl TriageConfig {
    pub fn from_env() -> Self {
        // Tracing is not initialized yet when this runs, so config-time
        // diagnostics go to stderr.
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }

        Self {
            anthropic_api_key: env_var_or("ANTHROPIC_API_KEY", String::new()),
            model: env_var_or("TRIAGE_MODEL", "claude-sonnet-4-20250514".to_string()),
            max_tokens: env_var_or("TRIAGE_MAX_TOKENS", 1024),
            upload_dir: env_var_or("TRIAGE_UPLOAD_DIR", "uploads".to_string()),
            host: env_var_or("TRIAGE_HOST", "0.0.0.0".to_string()),
            port: env_var_or("PORT", 5000),
            log_level: env_var_or("TRIAGE_LOG_LEVEL", "info".to_string()),
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
