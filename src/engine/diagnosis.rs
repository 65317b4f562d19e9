//! Diagnosis generation.
//!
//! Turns a finished [`InterviewContext`] into ranked [`DiagnosticSuggestion`]s.
//! Emergency indicators short-circuit everything else.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::context::InterviewContext;
use crate::catalog::{ONSET_SPEED_QUESTION_ID, VERY_SUDDEN_ONSET};

/// Selected symptoms that always mean an emergency.
pub const EMERGENCY_SYMPTOMS: [&str; 5] = [
    "chest_pain_severe",
    "breathing_difficulty",
    "consciousness_loss",
    "severe_headache",
    "vomiting_blood",
];

/// Severity at or above which the case is an emergency.
pub const EMERGENCY_SEVERITY: u8 = 8;

/// Most alternatives listed after the primary suggestion.
pub const MAX_ALTERNATIVES: usize = 3;

const BASE_PROBABILITY: u8 = 70;
const MAX_PROBABILITY: u8 = 95;
const MIN_ALTERNATIVE_PROBABILITY: u8 = 20;
const ALTERNATIVE_STEP: u8 = 15;

/// How quickly care is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosisSeverity {
    /// Call emergency services now.
    Emergency,
    /// See a doctor within a day.
    Urgent,
    /// See a doctor within days.
    Moderate,
    /// Self-care.
    Mild,
}

impl DiagnosisSeverity {
    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Urgent => "urgent",
            Self::Moderate => "moderate",
            Self::Mild => "mild",
        }
    }

    /// When to seek care at this severity.
    #[must_use]
    pub const fn care_timeline(&self) -> &'static str {
        match self {
            Self::Emergency => "RIGHT NOW - This is a medical emergency",
            Self::Urgent => "Within 24 hours",
            Self::Moderate => "Within 2-3 days if symptoms persist",
            Self::Mild => "If symptoms worsen or don't improve in a week",
        }
    }

    /// Recommendations for a suggestion at this severity.
    #[must_use]
    pub fn recommendations(&self) -> Vec<String> {
        let base = [
            "Monitor symptoms for any changes",
            "Stay well hydrated",
            "Get adequate rest",
            "Avoid known triggers if applicable",
        ];
        let urgent: &[&str] = match self {
            Self::Urgent => &[
                "Seek medical attention within 24 hours",
                "Contact your healthcare provider",
            ],
            _ => &[],
        };
        urgent
            .iter()
            .chain(base.iter())
            .map(|r| (*r).to_string())
            .collect()
    }
}

impl std::fmt::Display for DiagnosisSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ranked candidate diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticSuggestion {
    /// Condition name.
    pub condition: String,
    /// Likelihood, 0-100.
    pub probability: u8,
    /// Care urgency.
    pub severity: DiagnosisSeverity,
    /// Why this suggestion was made.
    pub reasoning: String,
    /// What to do.
    pub recommendations: Vec<String>,
    /// When to see a professional.
    pub when_to_seek_care: String,
}

/// Produce ranked suggestions for a context.
///
/// The result holds one to four suggestions, primary first, with
/// non-increasing probabilities.
#[must_use]
pub fn generate_diagnosis(context: &InterviewContext) -> Vec<DiagnosticSuggestion> {
    if has_emergency_indicators(context) {
        debug!(
            severity = context.current_severity,
            "Emergency indicators present, skipping differential"
        );
        return vec![emergency_suggestion()];
    }

    let Some((primary_condition, rest)) = context.suspected_conditions.split_first() else {
        return vec![further_evaluation_suggestion()];
    };

    let severity = classify_severity(context.current_severity);
    let probability = primary_probability(context);
    let primary = DiagnosticSuggestion {
        condition: primary_condition.clone(),
        probability,
        severity,
        reasoning: format!(
            "Based on your reported symptoms and their characteristics, {} is the most likely explanation for your current health concerns.",
            primary_condition.to_lowercase()
        ),
        recommendations: severity.recommendations(),
        when_to_seek_care: severity.care_timeline().to_string(),
    };

    let alternatives = rest
        .iter()
        .filter(|c| *c != primary_condition)
        .take(MAX_ALTERNATIVES)
        .zip(1u8..)
        .map(|(condition, rank)| DiagnosticSuggestion {
            condition: condition.clone(),
            probability: alternative_probability(probability, rank),
            severity,
            reasoning: "Alternative consideration based on symptom pattern".to_string(),
            recommendations: DiagnosisSeverity::Moderate.recommendations(),
            when_to_seek_care: DiagnosisSeverity::Moderate.care_timeline().to_string(),
        });

    let mut suggestions = vec![primary];
    suggestions.extend(alternatives);

    debug!(
        primary = %suggestions[0].condition,
        severity = severity.as_str(),
        count = suggestions.len(),
        "Diagnosis generated"
    );
    suggestions
}

/// Whether the context must be treated as an emergency.
#[must_use]
pub fn has_emergency_indicators(context: &InterviewContext) -> bool {
    let emergency_symptom = context
        .selected_symptoms
        .iter()
        .any(|s| EMERGENCY_SYMPTOMS.contains(&s.as_str()));
    let very_sudden = context
        .responses
        .get(ONSET_SPEED_QUESTION_ID)
        .and_then(|a| a.as_choice())
        .is_some_and(|c| c == VERY_SUDDEN_ONSET);

    emergency_symptom || context.current_severity >= EMERGENCY_SEVERITY || very_sudden
}

/// Map a 0-10 severity to a care tier.
#[must_use]
pub const fn classify_severity(severity: u8) -> DiagnosisSeverity {
    if severity >= EMERGENCY_SEVERITY {
        DiagnosisSeverity::Emergency
    } else if severity >= 6 {
        DiagnosisSeverity::Urgent
    } else if severity >= 4 {
        DiagnosisSeverity::Moderate
    } else {
        DiagnosisSeverity::Mild
    }
}

/// Probability of the primary suggestion.
#[must_use]
pub fn primary_probability(context: &InterviewContext) -> u8 {
    let mut probability = BASE_PROBABILITY;
    if context.selected_symptoms.len() > 3 {
        probability += 10;
    }
    if context.current_severity > 6 {
        probability += 10;
    }
    probability.min(MAX_PROBABILITY)
}

const fn alternative_probability(primary: u8, rank: u8) -> u8 {
    let drop = ALTERNATIVE_STEP.saturating_mul(rank);
    let probability = primary.saturating_sub(drop);
    if probability < MIN_ALTERNATIVE_PROBABILITY {
        MIN_ALTERNATIVE_PROBABILITY
    } else {
        probability
    }
}

fn emergency_suggestion() -> DiagnosticSuggestion {
    DiagnosticSuggestion {
        condition: "Medical Emergency - Immediate Care Required".to_string(),
        probability: 90,
        severity: DiagnosisSeverity::Emergency,
        reasoning: "Your symptoms indicate a potentially serious medical condition that requires immediate evaluation.".to_string(),
        recommendations: vec![
            "Call 911 immediately".to_string(),
            "Do not drive yourself to the hospital".to_string(),
            "Stay calm and follow emergency operator instructions".to_string(),
            "Have someone stay with you if possible".to_string(),
        ],
        when_to_seek_care: DiagnosisSeverity::Emergency.care_timeline().to_string(),
    }
}

fn further_evaluation_suggestion() -> DiagnosticSuggestion {
    DiagnosticSuggestion {
        condition: "General Symptoms - Further Evaluation Needed".to_string(),
        probability: 60,
        severity: DiagnosisSeverity::Moderate,
        reasoning: "Your symptoms require further medical evaluation for proper diagnosis."
            .to_string(),
        recommendations: vec![
            "Schedule appointment with primary care physician".to_string(),
            "Monitor symptoms for changes".to_string(),
            "Keep a symptom diary".to_string(),
            "Stay hydrated and get adequate rest".to_string(),
        ],
        when_to_seek_care: "Within 1-2 days if symptoms persist".to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::engine::context::{Answer, Demographics};
    use crate::engine::update_context;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_case::test_case;

    fn ctx() -> InterviewContext {
        InterviewContext::new(Demographics::new("29", "male"))
    }

    #[test_case(0, DiagnosisSeverity::Mild ; "unset")]
    #[test_case(3, DiagnosisSeverity::Mild ; "three")]
    #[test_case(4, DiagnosisSeverity::Moderate ; "four")]
    #[test_case(5, DiagnosisSeverity::Moderate ; "five")]
    #[test_case(6, DiagnosisSeverity::Urgent ; "six")]
    #[test_case(7, DiagnosisSeverity::Urgent ; "seven")]
    #[test_case(8, DiagnosisSeverity::Emergency ; "eight")]
    #[test_case(10, DiagnosisSeverity::Emergency ; "ten")]
    fn test_severity_ladder(severity: u8, expected: DiagnosisSeverity) {
        assert_eq!(classify_severity(severity), expected);
    }

    #[test_case(1, 3, 70 ; "base")]
    #[test_case(4, 3, 80 ; "many symptoms")]
    #[test_case(1, 7, 80 ; "high severity")]
    #[test_case(5, 7, 90 ; "both bumps")]
    fn test_primary_probability(symptoms: usize, severity: u8, expected: u8) {
        let ids = ["a", "b", "c", "d", "e"];
        let c = ctx()
            .with_selected_symptoms(ids.iter().take(symptoms).copied())
            .with_severity(severity);
        assert_eq!(primary_probability(&c), expected);
    }

    #[test]
    fn test_high_severity_short_circuits() {
        let c = ctx().with_severity(9);
        let result = generate_diagnosis(&c);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].severity, DiagnosisSeverity::Emergency);
        assert_eq!(result[0].probability, 90);
        assert_eq!(result[0].recommendations[0], "Call 911 immediately");
    }

    #[test]
    fn test_emergency_symptom_short_circuits() {
        let c = ctx()
            .with_selected_symptoms(["vomiting_blood"])
            .with_suspected_conditions(["Upper GI Bleeding", "Peptic Ulcer"])
            .with_severity(2);
        let result = generate_diagnosis(&c);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].severity, DiagnosisSeverity::Emergency);
    }

    #[test]
    fn test_very_sudden_onset_short_circuits() {
        let c = ctx().with_response(ONSET_SPEED_QUESTION_ID, Answer::Choice(VERY_SUDDEN_ONSET.into()));
        assert!(has_emergency_indicators(&c));
        assert_eq!(
            generate_diagnosis(&c)[0].when_to_seek_care,
            "RIGHT NOW - This is a medical emergency"
        );
    }

    #[test]
    fn test_no_conditions_needs_further_evaluation() {
        let result = generate_diagnosis(&ctx().with_severity(5));
        assert_eq!(result.len(), 1);
        assert_eq!(
            result[0].condition,
            "General Symptoms - Further Evaluation Needed"
        );
        assert_eq!(result[0].probability, 60);
        assert_eq!(result[0].severity, DiagnosisSeverity::Moderate);
    }

    #[test]
    fn test_mild_self_care_path() {
        let catalog = Catalog::builtin();
        let c = update_context(&catalog, &ctx(), "severity_overall", Answer::Scale(3));
        let c = update_context(
            &catalog,
            &c,
            ONSET_SPEED_QUESTION_ID,
            Answer::Choice("Gradually over days".into()),
        );
        let c = update_context(
            &catalog,
            &c,
            "gastrointestinal_symptoms",
            Answer::MultiChoice(vec!["nausea_mild".into()]),
        );

        let result = generate_diagnosis(&c);
        let primary = &result[0];
        assert_eq!(primary.condition, "Gastroenteritis");
        assert_eq!(primary.severity, DiagnosisSeverity::Mild);
        assert_eq!(primary.probability, 70);
        assert!(primary.recommendations.iter().all(|r| !r.contains("911")));
        assert_eq!(
            primary.when_to_seek_care,
            "If symptoms worsen or don't improve in a week"
        );
        assert!(primary.reasoning.contains("gastroenteritis is the most likely"));

        let alternatives: Vec<(&str, u8)> = result[1..]
            .iter()
            .map(|s| (s.condition.as_str(), s.probability))
            .collect();
        assert_eq!(
            alternatives,
            vec![("Food Poisoning", 55), ("Motion Sickness", 40)]
        );
    }

    #[test]
    fn test_urgent_recommendations_come_first() {
        let c = ctx()
            .with_severity(7)
            .with_suspected_conditions(["Migraine"]);
        let result = generate_diagnosis(&c);

        assert_eq!(result[0].severity, DiagnosisSeverity::Urgent);
        assert_eq!(result[0].recommendations.len(), 6);
        assert_eq!(
            result[0].recommendations[0],
            "Seek medical attention within 24 hours"
        );
        assert_eq!(result[0].when_to_seek_care, "Within 24 hours");
    }

    #[test]
    fn test_alternatives_capped_and_floored() {
        let c = ctx()
            .with_severity(1)
            .with_suspected_conditions(["A", "B", "C", "D", "E", "F"]);
        let result = generate_diagnosis(&c);
        let probabilities: Vec<u8> = result.iter().map(|s| s.probability).collect();
        assert_eq!(probabilities, vec![70, 55, 40, 25]);
        assert!(result[1..]
            .iter()
            .all(|s| s.severity == DiagnosisSeverity::Mild));
    }

    #[test]
    fn test_alternative_probability_floor() {
        assert_eq!(alternative_probability(70, 4), 20);
        assert_eq!(alternative_probability(95, 1), 80);
    }

    #[test]
    fn test_severity_serde_names() {
        let json = serde_json::to_string(&DiagnosisSeverity::Urgent).unwrap();
        assert_eq!(json, "\"urgent\"");
        let back: DiagnosisSeverity = serde_json::from_str("\"mild\"").unwrap();
        assert_eq!(back, DiagnosisSeverity::Mild);
        assert!(serde_json::from_str::<DiagnosisSeverity>("\"fatal\"").is_err());
    }

    proptest! {
        #[test]
        fn probabilities_bounded_and_non_increasing(
            severity in 0u8..=10,
            conditions in proptest::collection::vec("[A-Z][a-z]{2,10}", 0..8),
            symptoms in proptest::collection::vec("[a-z_]{3,12}", 0..6),
        ) {
            let c = ctx()
                .with_severity(severity)
                .with_suspected_conditions(conditions)
                .with_selected_symptoms(symptoms);
            let result = generate_diagnosis(&c);

            prop_assert!(!result.is_empty());
            prop_assert!(result.len() <= 1 + MAX_ALTERNATIVES);
            for s in &result {
                prop_assert!(s.probability <= 100);
            }
            for pair in result.windows(2) {
                prop_assert!(pair[0].probability >= pair[1].probability);
            }
        }

        #[test]
        fn high_severity_is_always_emergency(severity in EMERGENCY_SEVERITY..=10) {
            let result = generate_diagnosis(&ctx().with_severity(severity));
            prop_assert_eq!(result.len(), 1);
            prop_assert_eq!(result[0].severity, DiagnosisSeverity::Emergency);
        }
    }
}
