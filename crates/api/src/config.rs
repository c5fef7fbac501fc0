//! # API Configuration Module
//!
//! Loads the SlotBook server configuration from environment variables,
//! with defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: host address to bind to (default: "0.0.0.0")
//! - `API_PORT`: port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string; bookings are kept in memory when unset
//! - `LOG_LEVEL`: logging level (default: "info")
//! - `API_CORS_ORIGINS`: comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: request timeout (default: 30)
//! - `SCHEDULE_START_HOUR` / `SCHEDULE_END_HOUR`: bookable window (default: 9 / 15)
//! - `ANNOUNCEMENT`: message shown to every user, if set
//! - `ADMIN_PASSWORD_HASH`: argon2 hash guarding the admin routes

use eyre::{Result, WrapErr};
use slotbook_core::config::ScheduleConfig;
use std::env;
use tracing::Level;

/// Configuration for the SlotBook API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use slotbook_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL connection string; `None` selects the in-memory store
    pub database_url: Option<String>,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Bookable window
    pub schedule: ScheduleConfig,

    /// Global message for users
    pub announcement: Option<String>,

    /// Argon2 PHC string for the admin password
    pub admin_password_hash: Option<String>,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API_PORT value cannot be parsed as a u16
    /// - SCHEDULE_START_HOUR or SCHEDULE_END_HOUR is not a number
    /// - The schedule window is empty or outside 0..=24
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        // Logging settings
        let log_level =
            parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Schedule settings
        let start_hour = env::var("SCHEDULE_START_HOUR")
            .unwrap_or_else(|_| "9".to_string())
            .parse()
            .wrap_err("Invalid SCHEDULE_START_HOUR value")?;
        let end_hour = env::var("SCHEDULE_END_HOUR")
            .unwrap_or_else(|_| "15".to_string())
            .parse()
            .wrap_err("Invalid SCHEDULE_END_HOUR value")?;
        let schedule = ScheduleConfig::new(start_hour, end_hour)
            .wrap_err("Invalid schedule window")?;

        let announcement = env::var("ANNOUNCEMENT").ok().filter(|m| !m.trim().is_empty());

        // Security settings
        let admin_password_hash = env::var("ADMIN_PASSWORD_HASH").ok().filter(|h| !h.is_empty());

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            schedule,
            announcement,
            admin_password_hash,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:8080")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: None,
            log_level: Level::INFO,
            cors_origins: None,
            request_timeout: 30,
            schedule: ScheduleConfig::default(),
            announcement: None,
            admin_password_hash: None,
        }
    }
}

fn parse_log_level(value: &str) -> Level {
    match value {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
