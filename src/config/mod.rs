//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading (with optional `.env` file)
//! - Configuration validation
//! - Default value handling
//!
//! # Example
//!
//! ```
//! use symptom_interview::config::{Config, DEFAULT_HISTORY_LIMIT};
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     database_path: "./data/assessments.db".to_string(),
//!     log_level: "info".to_string(),
//!     history_limit: DEFAULT_HISTORY_LIMIT,
//!     max_interview_questions: 25,
//! };
//!
//! assert_eq!(config.history_limit, 50);
//! ```

mod validation;

pub use validation::{
    validate_config, MAX_HISTORY_LIMIT, MAX_INTERVIEW_QUESTIONS, MIN_INTERVIEW_QUESTIONS,
};

use crate::error::ConfigError;

/// Default database path.
pub const DEFAULT_DATABASE_PATH: &str = "./data/assessments.db";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default number of finished assessments kept in history.
pub const DEFAULT_HISTORY_LIMIT: u32 = 50;

/// Default cap on questions presented in one interview.
pub const DEFAULT_MAX_INTERVIEW_QUESTIONS: u32 = 25;

/// Application configuration.
///
/// Use [`Config::from_env`] to load configuration from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Database path.
    pub database_path: String,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
    /// Number of most recent assessments retained; older ones are evicted.
    pub history_limit: u32,
    /// Maximum number of questions one interview session presents.
    pub max_interview_questions: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.into(),
            log_level: DEFAULT_LOG_LEVEL.into(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            max_interview_questions: DEFAULT_MAX_INTERVIEW_QUESTIONS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (with defaults):
    /// - `DATABASE_PATH`: Path to `SQLite` database (default: `./data/assessments.db`)
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    /// - `HISTORY_LIMIT`: Assessments retained in history (default: `50`)
    /// - `MAX_INTERVIEW_QUESTIONS`: Question cap per interview (default: `25`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a numeric variable is not a valid positive
    /// integer or any value fails validation (see [`validate_config`]).
    #[must_use = "configuration should be used"]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let database_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.into());

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());

        let history_limit = parse_env_u32("HISTORY_LIMIT", DEFAULT_HISTORY_LIMIT)?;
        let max_interview_questions =
            parse_env_u32("MAX_INTERVIEW_QUESTIONS", DEFAULT_MAX_INTERVIEW_QUESTIONS)?;

        let config = Self {
            database_path,
            log_level,
            history_limit,
            max_interview_questions,
        };

        validate_config(&config)?;
        Ok(config)
    }
}

/// Parse an environment variable as u32, using a default if not set.
fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}
