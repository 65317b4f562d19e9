//! Trait abstractions for dependency injection and testing.
//!
//! This module defines traits for:
//! - [`AssessmentStore`]: Persistence of finished assessments
//! - [`TimeProvider`]: Time abstraction for testing
//!
//! # Mocking
//!
//! All traits are annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates mock implementations automatically for testing.
//!
//! # Example
//!
//! ```
//! use symptom_interview::traits::{TimeProvider, RealTimeProvider};
//!
//! let time_provider = RealTimeProvider;
//! let now = time_provider.now();
//! println!("Current time: {now}");
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::StorageError;
use crate::storage::AssessmentRecord;

/// Persistence collaborator for finished assessments.
///
/// Implementations keep records newest first and may evict old ones.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssessmentStore: Send + Sync {
    /// Save a finished assessment.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn save_assessment(&self, record: &AssessmentRecord) -> Result<(), StorageError>;

    /// List up to `limit` assessments, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn list_assessments(&self, limit: u32) -> Result<Vec<AssessmentRecord>, StorageError>;

    /// Get an assessment by ID.
    ///
    /// Returns `None` if the assessment doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn get_assessment(&self, id: &str) -> Result<Option<AssessmentRecord>, StorageError>;

    /// Delete every stored assessment, returning how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn clear_assessments(&self) -> Result<u64, StorageError>;
}

/// Time provider trait for deterministic testing.
///
/// This trait abstracts time operations to allow for
/// deterministic testing by providing fixed timestamps.
#[cfg_attr(test, mockall::automock)]
pub trait TimeProvider: Send + Sync {
    /// Get the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Real time provider using system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeProvider;

impl TimeProvider for RealTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use static_assertions::assert_impl_all;

    assert_impl_all!(RealTimeProvider: TimeProvider, Send, Sync, Copy);
    assert_impl_all!(crate::storage::SqliteStorage: AssessmentStore);

    #[test]
    fn test_real_time_provider_moves_forward() {
        let provider = RealTimeProvider;
        let a = provider.now();
        let b = provider.now();
        assert!(b >= a);
    }

    #[test]
    fn test_mock_time_provider() {
        let fixed = Utc.with_ymd_and_hms(2025, 12, 24, 8, 0, 0).unwrap();
        let mut mock = MockTimeProvider::new();
        mock.expect_now().times(1).return_const(fixed);
        assert_eq!(mock.now(), fixed);
    }

    #[tokio::test]
    async fn test_mock_assessment_store() {
        let mut store = MockAssessmentStore::new();
        store
            .expect_list_assessments()
            .withf(|limit| *limit == 5)
            .returning(|_| Ok(vec![]));
        store
            .expect_get_assessment()
            .returning(|id| Err(StorageError::AssessmentNotFound { id: id.to_string() }));

        assert!(store.list_assessments(5).await.unwrap().is_empty());
        assert!(store.get_assessment("gone").await.is_err());
    }
}
