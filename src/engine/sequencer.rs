//! Question sequencing.
//!
//! [`next_question`] picks what to ask next from the context alone:
//!
//! 1. Completion: enough information gathered, nothing more to ask.
//! 2. Follow-up: the last answered question's [`FollowUpRule`] names a target.
//! 3. Adaptive: a synthesized differential or symptom-detail question.
//!
//! The result depends only on its inputs.

use tracing::debug;

use super::context::{Answer, InterviewContext};
use crate::catalog::{
    Catalog, FollowUpRule, Question, QuestionType, CHEST_PAIN_CRUSHING, ONSET_QUESTION_ID,
    SEVERITY_QUESTION_ID, VERY_SUDDEN_ONSET, WORST_HEADACHE,
};

/// Answered questions needed before a diagnosis is offered.
pub const MIN_RESPONSES: usize = 5;

/// Id prefix of synthesized differential questions.
pub const DIFFERENTIAL_PREFIX: &str = "differential_";

/// Options of the synthesized symptom-detail question.
pub const DETAIL_OPTIONS: [&str; 6] = [
    "Gets worse with activity",
    "Gets better with rest",
    "Worse in the morning",
    "Worse at night",
    "Triggered by stress",
    "No clear pattern",
];

/// Whether the interview has gathered enough to produce a diagnosis.
///
/// Requires at least [`MIN_RESPONSES`] answers, one selected symptom, and
/// answers to both the severity and onset questions.
#[must_use]
pub fn has_enough_information(context: &InterviewContext) -> bool {
    context.responses.len() >= MIN_RESPONSES
        && !context.selected_symptoms.is_empty()
        && context.responses.is_answered(SEVERITY_QUESTION_ID)
        && context.responses.is_answered(ONSET_QUESTION_ID)
}

/// Decide the next question, or `None` when the interview is complete.
#[must_use]
pub fn next_question(catalog: &Catalog, context: &InterviewContext) -> Option<Question> {
    if has_enough_information(context) {
        debug!(responses = context.responses.len(), "Interview has enough information");
        return None;
    }

    if let Some(question) = follow_up_question(catalog, context) {
        return Some(question.clone());
    }

    adaptive_question(catalog, context)
}

/// Resolve the follow-up of the most recently answered question.
///
/// Ids that cannot be resolved in the catalog are soft misses and yield `None`.
#[must_use]
pub fn follow_up_question<'a>(
    catalog: &'a Catalog,
    context: &InterviewContext,
) -> Option<&'a Question> {
    let last = context.responses.last()?;
    let Some(previous) = catalog.find_question(&last.question_id) else {
        debug!(question_id = %last.question_id, "Previous question not in catalog");
        return None;
    };
    let rule = previous.follow_up?;
    let target = resolve_follow_up(rule, &last.answer, context)?;

    let question = catalog.find_question(target);
    match question {
        Some(_) => debug!(rule = rule.as_str(), target, "Follow-up resolved"),
        None => debug!(rule = rule.as_str(), target, "Follow-up target not in catalog"),
    }
    question
}

/// Map a follow-up rule and answer to the next question id.
///
/// A target that has already been answered in this session yields `None`.
#[must_use]
pub fn resolve_follow_up(
    rule: FollowUpRule,
    answer: &Answer,
    context: &InterviewContext,
) -> Option<&'static str> {
    let target = rule_target(rule, answer)?;
    if context.responses.contains(target) {
        return None;
    }
    Some(target)
}

/// The branch a rule takes for an answer, regardless of what was already asked.
fn rule_target(rule: FollowUpRule, answer: &Answer) -> Option<&'static str> {
    let choice = answer.as_choice();
    match rule {
        FollowUpRule::OnsetSpeed => (choice == Some(VERY_SUDDEN_ONSET)).then_some("emergency_check"),
        FollowUpRule::ChestPainQuality => Some(if choice == Some(CHEST_PAIN_CRUSHING) {
            "heart_attack_symptoms"
        } else {
            "chest_pain_triggers"
        }),
        FollowUpRule::HeadacheCharacter => Some(if choice == Some(WORST_HEADACHE) {
            "severe_headache_symptoms"
        } else {
            "headache_triggers"
        }),
    }
}

/// Whether an answered follow-up rule took a branch other than `question_id`.
///
/// Such a question belongs to the branch not taken and should not be asked.
#[must_use]
pub fn is_ruled_out(catalog: &Catalog, context: &InterviewContext, question_id: &str) -> bool {
    context.responses.iter().any(|entry| {
        catalog
            .find_question(&entry.question_id)
            .and_then(|q| q.follow_up)
            .is_some_and(|rule| {
                rule.targets().contains(&question_id)
                    && rule_target(rule, &entry.answer) != Some(question_id)
            })
    })
}

/// Synthesize a question from the current suspicions.
///
/// More than one suspected condition yields a differential question over the
/// discriminator symptoms; otherwise a selected symptom yields a detail question.
#[must_use]
pub fn adaptive_question(catalog: &Catalog, context: &InterviewContext) -> Option<Question> {
    if context.suspected_conditions.len() > 1 && !catalog.discriminators().is_empty() {
        return Some(differential_question(catalog, context));
    }
    detail_question(catalog, context)
}

/// Synthesize a detail question about the first selected symptom.
#[must_use]
pub fn detail_question(catalog: &Catalog, context: &InterviewContext) -> Option<Question> {
    let symptom_id = context.selected_symptoms.first()?;
    Some(symptom_detail_question(catalog, context, symptom_id))
}

fn differential_question(catalog: &Catalog, context: &InterviewContext) -> Question {
    let id = format!("{DIFFERENTIAL_PREFIX}{}", context.responses.len());
    debug!(
        question_id = %id,
        suspected = context.suspected_conditions.len(),
        "Synthesized differential question"
    );
    Question::new(
        id,
        "Which of these additional symptoms are you experiencing?",
        QuestionType::Symptoms,
    )
    .with_symptoms(catalog.discriminators().to_vec())
}

fn symptom_detail_question(
    catalog: &Catalog,
    context: &InterviewContext,
    symptom_id: &str,
) -> Question {
    let id = format!("detail_{symptom_id}_{}", context.responses.len());
    let name = catalog
        .find_symptom(symptom_id)
        .map_or_else(|| symptom_id.to_string(), |s| s.name.to_lowercase());
    debug!(question_id = %id, symptom_id, "Synthesized symptom detail question");
    Question::new(
        id,
        format!("Tell me more about your {name}. What makes it better or worse?"),
        QuestionType::Multiple,
    )
    .with_options(&DETAIL_OPTIONS)
}
