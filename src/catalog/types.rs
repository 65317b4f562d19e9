//! Catalog entry types.
//!
//! - [`Symptom`]: a selectable symptom and the conditions it points to
//! - [`Question`]: an interview question, optionally carrying a [`FollowUpRule`]
//! - [`Category`]: an ordered list of questions under a category id
//!
//! Everything here is plain data. Follow-up behaviour is a tag, resolved by
//! [`resolve_follow_up`](crate::engine::resolve_follow_up).

use serde::{Deserialize, Serialize};

/// How serious a single symptom is on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymptomSeverity {
    /// Usually self-limiting.
    Mild,
    /// Worth a medical opinion.
    Moderate,
    /// Potentially dangerous.
    Severe,
}

/// A symptom the user can select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symptom {
    /// Unique symptom identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Plain-language description.
    pub description: String,
    /// Severity of the symptom itself.
    pub severity: SymptomSeverity,
    /// Conditions this symptom is associated with, most typical first.
    pub related_conditions: Vec<String>,
    /// Body system the symptom belongs to.
    pub body_system: String,
}

impl Symptom {
    /// Create a new symptom.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        severity: SymptomSeverity,
        body_system: impl Into<String>,
        related_conditions: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            severity,
            related_conditions: related_conditions.iter().map(|c| (*c).to_string()).collect(),
            body_system: body_system.into(),
        }
    }
}

/// Kind of answer a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Free text.
    Open,
    /// Numeric 1-10 scale.
    Scale,
    /// One option out of a list.
    Multiple,
    /// Yes or no.
    Binary,
    /// Any number of symptoms from the question's symptom list.
    Symptoms,
    /// Free-text duration ("since Tuesday", "3 hours").
    Duration,
}

impl QuestionType {
    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Scale => "scale",
            Self::Multiple => "multiple",
            Self::Binary => "binary",
            Self::Symptoms => "symptoms",
            Self::Duration => "duration",
        }
    }
}

/// Identifier of a follow-up rule attached to a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpRule {
    /// Very sudden onset leads to the emergency screen.
    OnsetSpeed,
    /// Crushing chest pain leads to heart attack screening.
    ChestPainQuality,
    /// Thunderclap headache leads to red-flag neurological screening.
    HeadacheCharacter,
}

impl FollowUpRule {
    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OnsetSpeed => "onset_speed",
            Self::ChestPainQuality => "chest_pain_quality",
            Self::HeadacheCharacter => "headache_character",
        }
    }

    /// Every question id this rule can lead to.
    #[must_use]
    pub const fn targets(&self) -> &'static [&'static str] {
        match self {
            Self::OnsetSpeed => &["emergency_check"],
            Self::ChestPainQuality => &["heart_attack_symptoms", "chest_pain_triggers"],
            Self::HeadacheCharacter => &["severe_headache_symptoms", "headache_triggers"],
        }
    }
}

/// An interview question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique question identifier.
    pub id: String,
    /// Text shown to the user.
    pub text: String,
    /// Kind of answer expected.
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Options for `multiple` and `binary` questions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Selectable symptoms for `symptoms` questions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub symptoms: Vec<Symptom>,
    /// Whether the question may be skipped.
    pub required: bool,
    /// Rule choosing the next question from this question's answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<FollowUpRule>,
}

impl Question {
    /// Create a new optional question with no options.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, question_type: QuestionType) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            question_type,
            options: Vec::new(),
            symptoms: Vec::new(),
            required: false,
            follow_up: None,
        }
    }

    /// Mark the question as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the answer options.
    #[must_use]
    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|o| (*o).to_string()).collect();
        self
    }

    /// Set the selectable symptoms.
    #[must_use]
    pub fn with_symptoms(mut self, symptoms: Vec<Symptom>) -> Self {
        self.symptoms = symptoms;
        self
    }

    /// Attach a follow-up rule.
    #[must_use]
    pub const fn with_follow_up(mut self, rule: FollowUpRule) -> Self {
        self.follow_up = Some(rule);
        self
    }

    /// Options a choice answer is checked against.
    ///
    /// Binary questions without explicit options accept "Yes" and "No".
    #[must_use]
    pub fn choices(&self) -> Vec<&str> {
        if self.options.is_empty() && self.question_type == QuestionType::Binary {
            return vec!["Yes", "No"];
        }
        self.options.iter().map(String::as_str).collect()
    }

    /// Find one of this question's symptoms by ID.
    #[must_use]
    pub fn symptom(&self, id: &str) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.id == id)
    }
}

/// A named, ordered group of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier (e.g. `cardiovascular`).
    pub id: String,
    /// Questions in presentation order.
    pub questions: Vec<Question>,
}

impl Category {
    /// Create a new category.
    #[must_use]
    pub fn new(id: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id: id.into(),
            questions,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_question_builder() {
        let q = Question::new("q1", "How?", QuestionType::Multiple)
            .required()
            .with_options(&["A", "B"])
            .with_follow_up(FollowUpRule::OnsetSpeed);

        assert!(q.required);
        assert_eq!(q.options, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(q.follow_up, Some(FollowUpRule::OnsetSpeed));
    }

    #[test]
    fn test_binary_choices_default_to_yes_no() {
        let q = Question::new("fever_now", "Do you have a fever?", QuestionType::Binary);
        assert_eq!(q.choices(), vec!["Yes", "No"]);

        let q = q.with_options(&["Yes", "No", "Not sure"]);
        assert_eq!(q.choices().len(), 3);
    }

    #[test]
    fn test_follow_up_rule_targets() {
        assert_eq!(FollowUpRule::OnsetSpeed.targets(), &["emergency_check"]);
        assert_eq!(
            FollowUpRule::ChestPainQuality.targets(),
            &["heart_attack_symptoms", "chest_pain_triggers"]
        );
        assert_eq!(FollowUpRule::HeadacheCharacter.targets().len(), 2);
    }

    #[test]
    fn test_question_serializes_as_plain_data() {
        let q = Question::new("sudden_gradual", "Sudden?", QuestionType::Multiple)
            .with_follow_up(FollowUpRule::OnsetSpeed);
        let json = serde_json::to_value(&q).unwrap();

        assert_eq!(json["type"], "multiple");
        assert_eq!(json["followUp"], "onset_speed");
        assert!(json.get("symptoms").is_none());

        let back: Question = serde_json::from_value(json).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn test_symptom_lookup_on_question() {
        let q = Question::new("s", "Which?", QuestionType::Symptoms).with_symptoms(vec![
            Symptom::new(
                "fever",
                "Fever",
                "Body temperature above normal",
                SymptomSeverity::Mild,
                "general",
                &["Infection"],
            ),
        ]);
        assert_eq!(q.symptom("fever").map(|s| s.name.as_str()), Some("Fever"));
        assert!(q.symptom("cough").is_none());
    }
}
