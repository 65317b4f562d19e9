//! Configuration validation.
//!
//! Ensures configuration values are within acceptable ranges.

use super::Config;
use crate::error::ConfigError;

/// Maximum number of assessments kept in history.
pub const MAX_HISTORY_LIMIT: u32 = 500;

/// Minimum question cap; the completion predicate needs at least five answers.
pub const MIN_INTERVIEW_QUESTIONS: u32 = 5;

/// Maximum question cap.
pub const MAX_INTERVIEW_QUESTIONS: u32 = 100;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if any value is out of range:
/// - `DATABASE_PATH` must not be empty
/// - `HISTORY_LIMIT` must be between 1 and 500
/// - `MAX_INTERVIEW_QUESTIONS` must be between 5 and 100
#[must_use = "validation result should be checked"]
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.database_path.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "DATABASE_PATH".into(),
            reason: "must not be empty".into(),
        });
    }

    if config.history_limit == 0 || config.history_limit > MAX_HISTORY_LIMIT {
        return Err(ConfigError::InvalidValue {
            var: "HISTORY_LIMIT".into(),
            reason: format!("must be between 1 and {MAX_HISTORY_LIMIT}"),
        });
    }

    if config.max_interview_questions < MIN_INTERVIEW_QUESTIONS
        || config.max_interview_questions > MAX_INTERVIEW_QUESTIONS
    {
        return Err(ConfigError::InvalidValue {
            var: "MAX_INTERVIEW_QUESTIONS".into(),
            reason: format!(
                "must be between {MIN_INTERVIEW_QUESTIONS} and {MAX_INTERVIEW_QUESTIONS}"
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_database_path() {
        let config = Config {
            database_path: "  ".to_string(),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var, .. } if var == "DATABASE_PATH"));
    }

    #[test]
    fn test_history_limit_zero() {
        let config = Config {
            history_limit: 0,
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var, .. } if var == "HISTORY_LIMIT"));
    }

    #[test]
    fn test_history_limit_too_high() {
        let config = Config {
            history_limit: MAX_HISTORY_LIMIT + 1,
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_boundary_history_limit_max() {
        let config = Config {
            history_limit: MAX_HISTORY_LIMIT,
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_question_cap_bounds() {
        let low = Config {
            max_interview_questions: MIN_INTERVIEW_QUESTIONS - 1,
            ..Config::default()
        };
        let high = Config {
            max_interview_questions: MAX_INTERVIEW_QUESTIONS + 1,
            ..Config::default()
        };
        let edge = Config {
            max_interview_questions: MIN_INTERVIEW_QUESTIONS,
            ..Config::default()
        };
        assert!(validate_config(&low).is_err());
        assert!(validate_config(&high).is_err());
        assert!(validate_config(&edge).is_ok());
    }
}
