//! Condition inference.
//!
//! Suspected conditions are always recomputed in full from the responses and
//! selected symptoms: symptom-derived conditions first, in selection order,
//! then [`PATTERN_RULES`] in table order. Duplicates keep their first position.

use tracing::debug;

use super::context::{Answer, InterviewContext, Responses};
use crate::catalog::{
    Catalog, CHEST_PAIN_CRUSHING, ONSET_SPEED_QUESTION_ID, VERY_SUDDEN_ONSET, WORST_HEADACHE,
};

/// A fixed answer pattern that implies conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRule {
    /// Question whose answer is inspected.
    pub question_id: &'static str,
    /// Choice that triggers the rule.
    pub answer: &'static str,
    /// Conditions added when it triggers.
    pub conditions: &'static [&'static str],
}

impl PatternRule {
    /// Whether the rule fires for these responses.
    #[must_use]
    pub fn matches(&self, responses: &Responses) -> bool {
        responses
            .get(self.question_id)
            .and_then(Answer::as_choice)
            .is_some_and(|choice| choice == self.answer)
    }
}

/// Answer patterns applied after symptom-derived conditions.
pub const PATTERN_RULES: [PatternRule; 4] = [
    PatternRule {
        question_id: ONSET_SPEED_QUESTION_ID,
        answer: VERY_SUDDEN_ONSET,
        conditions: &["Acute Emergency"],
    },
    PatternRule {
        question_id: "chest_pain_quality",
        answer: CHEST_PAIN_CRUSHING,
        conditions: &["Heart Attack", "Unstable Angina"],
    },
    PatternRule {
        question_id: "headache_characteristics",
        answer: WORST_HEADACHE,
        conditions: &["Subarachnoid Hemorrhage"],
    },
    PatternRule {
        question_id: "abdominal_location",
        answer: "Lower right",
        conditions: &["Appendicitis"],
    },
];

/// Record an answer and recompute every derived field.
///
/// - the answer is stored under `question_id`
/// - multi-choice selections are added to the selected symptoms
/// - a scale answer (the severity question) sets the current severity
/// - suspected conditions are recomputed from scratch
///
/// The input context is not modified.
#[must_use]
pub fn update_context(
    catalog: &Catalog,
    context: &InterviewContext,
    question_id: &str,
    answer: Answer,
) -> InterviewContext {
    let mut next = context.clone();

    next.select_symptoms(answer.selections().iter().cloned());
    if let Some(value) = answer.as_scale() {
        next.current_severity = value;
    }
    next.responses.insert(question_id, answer);

    next.suspected_conditions =
        infer_suspected_conditions(catalog, &next.responses, &next.selected_symptoms);

    debug!(
        question_id,
        responses = next.responses.len(),
        selected = next.selected_symptoms.len(),
        suspected = next.suspected_conditions.len(),
        "Context updated"
    );

    next
}

/// Compute the suspected condition list.
///
/// Symptom ids missing from the catalog contribute nothing.
#[must_use]
pub fn infer_suspected_conditions(
    catalog: &Catalog,
    responses: &Responses,
    selected_symptoms: &[String],
) -> Vec<String> {
    let from_symptoms = selected_symptoms
        .iter()
        .filter_map(|id| catalog.find_symptom(id))
        .flat_map(|symptom| symptom.related_conditions.iter().map(String::as_str));

    let from_patterns = PATTERN_RULES
        .iter()
        .filter(|rule| rule.matches(responses))
        .flat_map(|rule| rule.conditions.iter().copied());

    let mut conditions: Vec<String> = Vec::new();
    for condition in from_symptoms.chain(from_patterns) {
        if !conditions.iter().any(|c| c == condition) {
            conditions.push(condition.to_string());
        }
    }
    conditions
}
