//! Interview state.
//!
//! [`InterviewContext`] is the aggregate threaded through one assessment.
//! It is a plain value: engine functions take it by reference and return a
//! new one, so a caller can keep earlier snapshots around.

use serde::{Deserialize, Serialize};

/// A typed answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// Free text for `open` and `duration` questions.
    Text(String),
    /// One option of a `multiple` or `binary` question.
    Choice(String),
    /// Symptom ids picked from a `symptoms` question.
    MultiChoice(Vec<String>),
    /// A 1-10 value for a `scale` question.
    Scale(u8),
    /// The user declined to answer.
    Skipped,
}

impl Answer {
    /// The chosen option, if this is a single choice.
    #[must_use]
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Self::Choice(choice) => Some(choice),
            _ => None,
        }
    }

    /// The selected ids, empty unless this is a multi-choice answer.
    #[must_use]
    pub fn selections(&self) -> &[String] {
        match self {
            Self::MultiChoice(ids) => ids,
            _ => &[],
        }
    }

    /// The scale value, if this is a scale answer.
    #[must_use]
    pub const fn as_scale(&self) -> Option<u8> {
        match self {
            Self::Scale(value) => Some(*value),
            _ => None,
        }
    }

    /// Whether the question was skipped.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    /// Short human-readable rendering.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) | Self::Choice(text) => text.clone(),
            Self::MultiChoice(ids) if ids.is_empty() => "none".to_string(),
            Self::MultiChoice(ids) => ids.join(", "),
            Self::Scale(value) => format!("{value}/10"),
            Self::Skipped => "skipped".to_string(),
        }
    }
}

/// One answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEntry {
    /// The question that was answered.
    pub question_id: String,
    /// The answer given.
    pub answer: Answer,
}

/// Answers keyed by question id, in the order questions were first answered.
///
/// Re-answering a question replaces the value in place; entries are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Responses {
    entries: Vec<ResponseEntry>,
}

impl Responses {
    /// Create an empty response map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an answer.
    pub fn insert(&mut self, question_id: impl Into<String>, answer: Answer) {
        let question_id = question_id.into();
        if let Some(entry) = self.entries.iter_mut().find(|e| e.question_id == question_id) {
            entry.answer = answer;
        } else {
            self.entries.push(ResponseEntry {
                question_id,
                answer,
            });
        }
    }

    /// Look up the answer to a question.
    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.entries
            .iter()
            .find(|e| e.question_id == question_id)
            .map(|e| &e.answer)
    }

    /// Whether the question has any answer, including a skip.
    #[must_use]
    pub fn contains(&self, question_id: &str) -> bool {
        self.get(question_id).is_some()
    }

    /// Whether the question has a non-skipped answer.
    #[must_use]
    pub fn is_answered(&self, question_id: &str) -> bool {
        self.get(question_id).is_some_and(|a| !a.is_skipped())
    }

    /// The most recently added entry.
    #[must_use]
    pub fn last(&self) -> Option<&ResponseEntry> {
        self.entries.last()
    }

    /// Number of answered questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been answered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in answer order.
    pub fn iter(&self) -> impl Iterator<Item = &ResponseEntry> {
        self.entries.iter()
    }
}

/// Who the assessment is for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    /// Age as entered.
    pub age: String,
    /// Gender as entered.
    pub gender: String,
}

impl Demographics {
    /// Create demographics.
    #[must_use]
    pub fn new(age: impl Into<String>, gender: impl Into<String>) -> Self {
        Self {
            age: age.into(),
            gender: gender.into(),
        }
    }
}

/// Accumulated state of one interview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewContext {
    /// Answers given so far.
    pub responses: Responses,
    /// Selected symptom ids, unique, in selection order.
    pub selected_symptoms: Vec<String>,
    /// Last recorded 1-10 severity, 0 if none.
    pub current_severity: u8,
    /// Candidate conditions, recomputed after every answer.
    pub suspected_conditions: Vec<String>,
    /// Reserved for risk factor extensions.
    pub risk_factors: Vec<String>,
    /// Fixed for the whole session.
    pub demographics: Demographics,
}

impl InterviewContext {
    /// Create an empty context for a new assessment.
    #[must_use]
    pub fn new(demographics: Demographics) -> Self {
        Self {
            demographics,
            ..Self::default()
        }
    }

    /// Return a copy with the given symptoms selected.
    ///
    /// Duplicates are ignored. Suspected conditions are not recomputed; use
    /// [`update_context`](super::update_context) for that.
    #[must_use]
    pub fn with_selected_symptoms<I, S>(&self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.clone();
        next.select_symptoms(ids);
        next
    }

    /// Return a copy with the given severity.
    #[must_use]
    pub fn with_severity(&self, severity: u8) -> Self {
        Self {
            current_severity: severity,
            ..self.clone()
        }
    }

    /// Return a copy with the given suspected conditions.
    #[must_use]
    pub fn with_suspected_conditions<I, S>(&self, conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suspected_conditions: conditions.into_iter().map(Into::into).collect(),
            ..self.clone()
        }
    }

    /// Return a copy with one more response recorded.
    ///
    /// Derived fields are left untouched.
    #[must_use]
    pub fn with_response(&self, question_id: impl Into<String>, answer: Answer) -> Self {
        let mut next = self.clone();
        next.responses.insert(question_id, answer);
        next
    }

    pub(crate) fn select_symptoms<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            let id = id.into();
            if !self.selected_symptoms.contains(&id) {
                self.selected_symptoms.push(id);
            }
        }
    }
}
