//! `AssessmentStore` implementation for `SqliteStorage`.

#![allow(clippy::missing_errors_doc)]

use async_trait::async_trait;

use crate::error::StorageError;
use crate::traits::AssessmentStore;

use super::core::SqliteStorage;
use super::types::AssessmentRecord;

#[async_trait]
impl AssessmentStore for SqliteStorage {
    async fn save_assessment(&self, record: &AssessmentRecord) -> Result<(), StorageError> {
        Self::save_assessment(self, record).await
    }

    async fn list_assessments(&self, limit: u32) -> Result<Vec<AssessmentRecord>, StorageError> {
        Self::list_assessments(self, limit).await
    }

    async fn get_assessment(&self, id: &str) -> Result<Option<AssessmentRecord>, StorageError> {
        Self::get_assessment(self, id).await
    }

    async fn clear_assessments(&self) -> Result<u64, StorageError> {
        Self::clear_assessments(self).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::engine::InterviewContext;
    use crate::storage::core::tests::test_storage;
    use chrono::Utc;
    use serial_test::serial;

    async fn round_trip(store: &dyn AssessmentStore) {
        let record = AssessmentRecord::new(
            "via-trait",
            "general",
            InterviewContext::default(),
            vec![],
            Utc::now(),
        );
        store.save_assessment(&record).await.unwrap();

        let listed = store.list_assessments(10).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "via-trait");
        assert!(store.get_assessment("via-trait").await.unwrap().is_some());
        assert_eq!(store.clear_assessments().await.unwrap(), 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_sqlite_through_trait_object() {
        let storage = test_storage().await;
        round_trip(&storage).await;
    }
}
