//! Assessment storage operations.

#![allow(clippy::missing_errors_doc)]

use crate::error::StorageError;
use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::Row;
use tracing::{debug, info};

use super::core::SqliteStorage;
use super::types::AssessmentRecord;

const SELECT_COLUMNS: &str = "SELECT id, category, demographics, responses, selected_symptoms, \
     suspected_conditions, diagnosis, created_at FROM assessments";

impl SqliteStorage {
    /// Save a finished assessment and evict anything beyond the history limit.
    ///
    /// The insert and the eviction commit together or not at all.
    pub async fn save_assessment(&self, record: &AssessmentRecord) -> Result<(), StorageError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| Self::query_error("BEGIN save_assessment", format!("{e}")))?;

        sqlx::query(
            "INSERT INTO assessments (id, category, demographics, responses, selected_symptoms, \
             suspected_conditions, diagnosis, primary_condition, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.category)
        .bind(Self::to_json(&record.demographics)?)
        .bind(Self::to_json(&record.responses)?)
        .bind(Self::to_json(&record.selected_symptoms)?)
        .bind(Self::to_json(&record.suspected_conditions)?)
        .bind(Self::to_json(&record.diagnosis)?)
        .bind(record.primary().map(|d| d.condition.as_str()))
        .bind(record.timestamp.to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(|e| Self::query_error("INSERT assessments", format!("{e}")))?;

        let evicted = self.evict_beyond_limit(&mut tx).await?;

        tx.commit()
            .await
            .map_err(|e| Self::query_error("COMMIT save_assessment", format!("{e}")))?;

        info!(
            assessment_id = %record.id,
            category = %record.category,
            evicted,
            "Assessment saved"
        );
        Ok(())
    }

    /// Delete everything but the newest `history_limit` assessments.
    async fn evict_beyond_limit(&self, conn: &mut SqliteConnection) -> Result<u64, StorageError> {
        let result = sqlx::query(
            "DELETE FROM assessments WHERE seq NOT IN \
             (SELECT seq FROM assessments ORDER BY seq DESC LIMIT ?)",
        )
        .bind(i64::from(self.history_limit))
        .execute(&mut *conn)
        .await
        .map_err(|e| Self::query_error("DELETE assessments (evict)", format!("{e}")))?;

        let evicted = result.rows_affected();
        if evicted > 0 {
            debug!(evicted, limit = self.history_limit, "Evicted old assessments");
        }
        Ok(evicted)
    }

    /// List assessments, newest first.
    pub async fn list_assessments(&self, limit: u32) -> Result<Vec<AssessmentRecord>, StorageError> {
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY seq DESC LIMIT ?"))
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::query_error("SELECT assessments", format!("{e}")))?;

        rows.iter().map(Self::row_to_assessment).collect()
    }

    /// Get an assessment by ID.
    pub async fn get_assessment(&self, id: &str) -> Result<Option<AssessmentRecord>, StorageError> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::query_error("SELECT assessments", format!("{e}")))?;

        row.as_ref().map(Self::row_to_assessment).transpose()
    }

    /// Delete one assessment.
    pub async fn delete_assessment(&self, id: &str) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM assessments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::query_error("DELETE assessments", format!("{e}")))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::AssessmentNotFound { id: id.to_string() });
        }
        Ok(())
    }

    /// Delete all assessments, returning how many were removed.
    pub async fn clear_assessments(&self) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM assessments")
            .execute(&self.pool)
            .await
            .map_err(|e| Self::query_error("DELETE assessments", format!("{e}")))?;

        info!(removed = result.rows_affected(), "Assessment history cleared");
        Ok(result.rows_affected())
    }

    /// Count stored assessments.
    pub async fn count_assessments(&self) -> Result<u64, StorageError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM assessments")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::query_error("COUNT assessments", format!("{e}")))?;

        let count: i64 = row.get("count");
        Ok(u64::try_from(count).unwrap_or(0))
    }

    fn row_to_assessment(row: &SqliteRow) -> Result<AssessmentRecord, StorageError> {
        let created_at: String = row.get("created_at");
        let demographics: String = row.get("demographics");
        let responses: String = row.get("responses");
        let selected_symptoms: String = row.get("selected_symptoms");
        let suspected_conditions: String = row.get("suspected_conditions");
        let diagnosis: String = row.get("diagnosis");

        Ok(AssessmentRecord {
            id: row.get("id"),
            category: row.get("category"),
            demographics: Self::from_json("demographics", &demographics)?,
            responses: Self::from_json("responses", &responses)?,
            selected_symptoms: Self::from_json("selected_symptoms", &selected_symptoms)?,
            suspected_conditions: Self::from_json("suspected_conditions", &suspected_conditions)?,
            diagnosis: Self::from_json("diagnosis", &diagnosis)?,
            timestamp: Self::parse_datetime(&created_at)?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::engine::{generate_diagnosis, Answer, Demographics, InterviewContext};
    use crate::storage::core::tests::test_storage;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    fn record(id: &str) -> AssessmentRecord {
        let context = InterviewContext::new(Demographics::new("38", "female"))
            .with_response("chief_complaint", Answer::Text("stomach ache".into()))
            .with_response("severity_overall", Answer::Scale(4))
            .with_response(
                "gastrointestinal_symptoms",
                Answer::MultiChoice(vec!["abdominal_pain_cramping".into()]),
            )
            .with_selected_symptoms(["abdominal_pain_cramping"])
            .with_suspected_conditions(["Irritable Bowel Syndrome", "Gastroenteritis"])
            .with_severity(4);
        let diagnosis = generate_diagnosis(&context);
        AssessmentRecord::new(id, "gastrointestinal", context, diagnosis, Utc::now())
    }

    #[tokio::test]
    #[serial]
    async fn test_save_and_get_assessment() {
        let storage = test_storage().await;
        let original = record("a1");
        storage.save_assessment(&original).await.unwrap();

        let loaded = storage.get_assessment("a1").await.unwrap().unwrap();
        assert_eq!(loaded.id, original.id);
        assert_eq!(loaded.responses, original.responses);
        assert_eq!(loaded.diagnosis, original.diagnosis);
        assert_eq!(loaded.timestamp.timestamp(), original.timestamp.timestamp());
    }

    #[tokio::test]
    #[serial]
    async fn test_get_missing_assessment() {
        let storage = test_storage().await;
        assert!(storage.get_assessment("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    #[serial]
    async fn test_list_is_newest_first() {
        let storage = test_storage().await;
        for id in ["first", "second", "third"] {
            storage.save_assessment(&record(id)).await.unwrap();
        }

        let ids: Vec<String> = storage
            .list_assessments(10)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["third", "second", "first"]);

        assert_eq!(storage.list_assessments(1).await.unwrap().len(), 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_history_limit_evicts_oldest() {
        let storage = test_storage().await.with_history_limit(2);
        for id in ["a", "b", "c"] {
            storage.save_assessment(&record(id)).await.unwrap();
        }

        assert_eq!(storage.count_assessments().await.unwrap(), 2);
        assert!(storage.get_assessment("a").await.unwrap().is_none());
        assert!(storage.get_assessment("c").await.unwrap().is_some());
    }

    #[tokio::test]
    #[serial]
    async fn test_failed_eviction_rolls_back_insert() {
        let storage = test_storage().await.with_history_limit(1);
        storage.save_assessment(&record("kept")).await.unwrap();
        sqlx::raw_sql(
            "CREATE TRIGGER block_delete BEFORE DELETE ON assessments \
             BEGIN SELECT RAISE(ABORT, 'deletes blocked'); END;",
        )
        .execute(&storage.pool)
        .await
        .unwrap();

        let err = storage.save_assessment(&record("rejected")).await.unwrap_err();
        assert!(matches!(err, StorageError::QueryFailed { ref query, .. } if query.contains("evict")));
        assert_eq!(storage.count_assessments().await.unwrap(), 1);
        assert!(storage.get_assessment("rejected").await.unwrap().is_none());
        assert!(storage.get_assessment("kept").await.unwrap().is_some());
    }

    #[tokio::test]
    #[serial]
    async fn test_duplicate_id_rejected() {
        let storage = test_storage().await;
        storage.save_assessment(&record("dup")).await.unwrap();
        let err = storage.save_assessment(&record("dup")).await.unwrap_err();
        assert!(matches!(err, StorageError::QueryFailed { .. }));
    }

    #[tokio::test]
    #[serial]
    async fn test_delete_and_clear() {
        let storage = test_storage().await;
        storage.save_assessment(&record("x")).await.unwrap();
        storage.save_assessment(&record("y")).await.unwrap();

        storage.delete_assessment("x").await.unwrap();
        assert!(matches!(
            storage.delete_assessment("x").await,
            Err(StorageError::AssessmentNotFound { .. })
        ));

        assert_eq!(storage.clear_assessments().await.unwrap(), 1);
        assert_eq!(storage.count_assessments().await.unwrap(), 0);
    }
}
