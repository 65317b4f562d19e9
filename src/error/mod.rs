//! Error types for the symptom interview.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`EngineError`]: Answer validation at the interview session boundary
//! - [`StorageError`]: Database operation errors
//! - [`ConfigError`]: Configuration errors
//! - [`CommandParseError`]: Command-line parsing errors
//!
//! The engine functions themselves ([`next_question`], [`update_context`],
//! [`generate_diagnosis`]) are infallible; errors only arise where a caller
//! submits data or where I/O happens.
//!
//! [`next_question`]: crate::engine::next_question
//! [`update_context`]: crate::engine::update_context
//! [`generate_diagnosis`]: crate::engine::generate_diagnosis

use thiserror::Error;

/// Top-level application error.
///
/// This is the main error type returned by the binary and by functions that
/// cross more than one subsystem.
#[derive(Debug, Error)]
pub enum AppError {
    /// Interview engine error.
    #[error("Interview error: {0}")]
    Engine(#[from] EngineError),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Command-line error.
    #[error("Command error: {0}")]
    Command(#[from] CommandParseError),

    /// Terminal I/O error.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Interview session errors.
///
/// Raised when a caller submits an answer the current session cannot accept.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No question is waiting for an answer.
    #[error("No question is pending an answer")]
    NoPendingQuestion,

    /// The answer was submitted for a different question than the pending one.
    #[error("Answer submitted for {actual} but {expected} is pending")]
    QuestionMismatch {
        /// The pending question ID.
        expected: String,
        /// The question ID the caller answered.
        actual: String,
    },

    /// A required question was skipped.
    #[error("Question {question_id} requires an answer")]
    AnswerRequired {
        /// The required question ID.
        question_id: String,
    },

    /// The answer does not fit the question.
    #[error("Invalid answer for {question_id}: {reason}")]
    InvalidAnswer {
        /// The question ID.
        question_id: String,
        /// Why the answer was rejected.
        reason: String,
    },

    /// The interview already has enough information.
    #[error("Interview is already complete")]
    InterviewComplete,
}

/// Storage errors.
///
/// These errors represent failures in database operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Failed to connect to the database.
    #[error("Database connection failed: {message}")]
    ConnectionFailed {
        /// Description of the connection failure.
        message: String,
    },

    /// A database query failed.
    #[error("Query failed: {query} - {message}")]
    QueryFailed {
        /// The query that failed (may be truncated).
        query: String,
        /// Description of the failure.
        message: String,
    },

    /// Assessment not found.
    #[error("Assessment not found: {id}")]
    AssessmentNotFound {
        /// The assessment ID that was not found.
        id: String,
    },

    /// Database migration failed.
    #[error("Migration failed: {version} - {message}")]
    MigrationFailed {
        /// The migration version that failed.
        version: String,
        /// Description of the failure.
        message: String,
    },

    /// A stored JSON column could not be encoded or decoded.
    #[error("Serialization failed: {message}")]
    Serialization {
        /// Description of the failure.
        message: String,
    },

    /// Internal storage error.
    #[error("Internal storage error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}

/// Errors that can occur when parsing command-line arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    /// No command was given.
    #[error("No command specified. Run 'symptom-interview help' for usage.")]
    MissingCommand,

    /// The command is not recognised.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A flag that needs a value was given without one.
    #[error("Missing value for {0}")]
    MissingValue(String),

    /// The flag is not recognised.
    #[error("Unknown flag: {0}")]
    UnknownFlag(String),

    /// A flag value could not be parsed.
    #[error("Invalid value '{value}' for {flag}")]
    InvalidValue {
        /// The flag name.
        flag: String,
        /// The offending value.
        value: String,
    },
}
