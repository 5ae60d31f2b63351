//! Centralized application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::credentials_file::CREDENTIALS_FILE_ENV;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Default cap on the login request body.
pub const DEFAULT_MAX_JSON_PAYLOAD_SIZE: usize = 16 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    // Server configuration
    pub host: String,
    pub port: u16,

    // Security configuration
    pub security: SecurityConfig,
    pub credentials_file: PathBuf,

    // HTTP payload limits
    pub max_json_payload_size: usize,
}

impl Config {
    /// Load and validate all configuration from environment variables.
    ///
    /// The signing secret and credentials file are mandatory; there are no
    /// fallbacks for either.
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port_str = env::var("BACKEND_PORT").unwrap_or_else(|_| "3001".to_string());
        let port = port_str.parse::<u16>().map_err(|_| {
            AppError::config(format!(
                "BACKEND_PORT must be a valid port number, got '{port_str}'"
            ))
        })?;

        let security = SecurityConfig::from_env()?;

        let credentials_file = env::var(CREDENTIALS_FILE_ENV)
            .map(PathBuf::from)
            .map_err(|_| AppError::config(format!("{CREDENTIALS_FILE_ENV} must be set")))?;

        let max_json_payload_size = env::var("MAX_JSON_PAYLOAD_SIZE")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_JSON_PAYLOAD_SIZE);

        Ok(Config {
            host,
            port,
            security,
            credentials_file,
            max_json_payload_size,
        })
    }
}
