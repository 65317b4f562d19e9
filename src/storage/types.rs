//! Storage types for database operations.
//!
//! - [`AssessmentRecord`]: a finished interview and its diagnosis

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::{Demographics, DiagnosticSuggestion, InterviewContext, Responses};

/// A finished assessment as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    /// Unique assessment identifier.
    pub id: String,
    /// Category the interview was started for.
    pub category: String,
    /// Who the assessment was for.
    pub demographics: Demographics,
    /// Every answer, in answer order.
    pub responses: Responses,
    /// Selected symptom ids.
    pub selected_symptoms: Vec<String>,
    /// Suspected conditions at the end of the interview.
    pub suspected_conditions: Vec<String>,
    /// Ranked suggestions, primary first.
    pub diagnosis: Vec<DiagnosticSuggestion>,
    /// When the assessment finished.
    pub timestamp: DateTime<Utc>,
}

impl AssessmentRecord {
    /// Build a record from a finished interview context.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        context: InterviewContext,
        diagnosis: Vec<DiagnosticSuggestion>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            demographics: context.demographics,
            responses: context.responses,
            selected_symptoms: context.selected_symptoms,
            suspected_conditions: context.suspected_conditions,
            diagnosis,
            timestamp,
        }
    }

    /// The primary suggestion.
    #[must_use]
    pub fn primary(&self) -> Option<&DiagnosticSuggestion> {
        self.diagnosis.first()
    }
}
