//! # Web Configuration Module
//!
//! This module handles loading and managing configuration for the Mentorbook
//! web front-end. It retrieves configuration values from environment variables
//! and provides defaults where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `WEB_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `WEB_PORT`: The port to listen on (default: 3000)
//! - `BACKEND_URL`: Base URL of the mentor/booking backend (default: "http://localhost:5000/api")
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `WEB_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `WEB_REQUEST_TIMEOUT_SECONDS`: Upper bound on handling one request (default: 30)
//! - `DISPLAY_TIMEZONE`: IANA timezone in which "today" is read for calendars (default: "UTC")
//! - `SELECTION_TTL_MINUTES`: Idle lifetime of a student's pending day selection (default: 30)
//! - `SELECTION_CAPACITY`: Maximum number of pending selections kept (default: 10000)

use chrono_tz::Tz;
use eyre::{Result, WrapErr};
use mentorbook_backend::DEFAULT_BACKEND_URL;
use std::{env, time::Duration};
use tracing::Level;

use crate::selection_store::{DEFAULT_SELECTION_CAPACITY, DEFAULT_SELECTION_TTL};

/// Configuration for the Mentorbook web server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use mentorbook_web::config::WebConfig;
///
/// fn example() -> Result<()> {
///     let config = WebConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Host address for the web server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the web server to listen on
    pub port: u16,

    /// Base URL of the external backend, without trailing slash
    pub backend_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Timezone used to decide which month is "this month"
    pub display_timezone: Tz,

    /// Idle lifetime of a pending day selection
    pub selection_ttl: Duration,

    /// Maximum number of pending selections held at once
    pub selection_capacity: usize,
}

impl WebConfig {
    /// Creates a new WebConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The WEB_PORT value cannot be parsed as a u16
    /// - The DISPLAY_TIMEZONE value is not a known IANA timezone
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    ///
    /// `from_env` delegates here; tests pass a closure over a map instead of
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = lookup("WEB_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("WEB_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .wrap_err("Invalid WEB_PORT value")?;

        // Backend settings
        let backend_url = lookup("BACKEND_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        // Logging settings
        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("WEB_CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        // Performance settings
        let request_timeout = lookup("WEB_REQUEST_TIMEOUT_SECONDS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(30);

        // Calendar settings
        let display_timezone = match lookup("DISPLAY_TIMEZONE") {
            Some(name) => name
                .trim()
                .parse::<Tz>()
                .map_err(|e| eyre::eyre!("{}", e))
                .wrap_err_with(|| format!("Invalid DISPLAY_TIMEZONE value: {}", name))?,
            None => Tz::UTC,
        };

        // Selection store settings
        let selection_ttl = lookup("SELECTION_TTL_MINUTES")
            .and_then(|value| value.parse::<u64>().ok())
            .map(|minutes| Duration::from_secs(minutes * 60))
            .unwrap_or(DEFAULT_SELECTION_TTL);
        let selection_capacity = lookup("SELECTION_CAPACITY")
            .and_then(|value| value.parse().ok())
            .filter(|capacity| *capacity > 0)
            .unwrap_or(DEFAULT_SELECTION_CAPACITY);

        Ok(Self {
            host,
            port,
            backend_url,
            log_level,
            cors_origins,
            request_timeout,
            display_timezone,
            selection_ttl,
            selection_capacity,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:3000")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
