//! Storage backend.
//!
//! This module provides:
//! - `SQLite` database implementation
//! - Assessment history with a retention cap
//!
//! # Architecture
//!
//! The storage layer uses `SQLite` with the `sqlx` crate for async operations.
//! List-valued fields of an [`AssessmentRecord`] are stored as JSON text.
//!
//! The implementation is split across submodules:
//! - `core`: Pool management, migrations, and helper functions
//! - `assessment`: Assessment CRUD and eviction
//! - `trait_impl`: `AssessmentStore` implementation
//!
//! # Example
//!
//! ```ignore
//! use symptom_interview::storage::SqliteStorage;
//!
//! let storage = SqliteStorage::new("./data/assessments.db").await?.with_history_limit(50);
//! let recent = storage.list_assessments(10).await?;
//! ```

mod assessment;
mod core;
mod trait_impl;
mod types;

pub use self::core::SqliteStorage;
pub use types::AssessmentRecord;
