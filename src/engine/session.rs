//! Interview session boundary.
//!
//! [`InterviewSession`] owns one [`InterviewContext`] and drives it with the
//! pure engine functions. It is where answers are validated, where the plan of
//! catalog questions is walked, and where the question cap is enforced.

use tracing::{debug, info};
use uuid::Uuid;

use super::context::{Answer, Demographics, InterviewContext};
use super::diagnosis::{generate_diagnosis, DiagnosticSuggestion};
use super::inference::update_context;
use super::sequencer::{
    adaptive_question, detail_question, follow_up_question, has_enough_information,
    is_ruled_out, DIFFERENTIAL_PREFIX,
};
use crate::catalog::{Catalog, Question, QuestionType};
use crate::error::EngineError;
use crate::storage::AssessmentRecord;
use crate::traits::TimeProvider;

/// Lowest accepted scale answer.
pub const SCALE_MIN: u8 = 1;

/// Highest accepted scale answer.
pub const SCALE_MAX: u8 = 10;

/// One user's interview from first question to diagnosis.
#[derive(Debug)]
pub struct InterviewSession<'a> {
    catalog: &'a Catalog,
    category: String,
    context: InterviewContext,
    pending: Option<Question>,
    presented: Vec<String>,
    max_questions: usize,
    differential_settled: bool,
}

impl<'a> InterviewSession<'a> {
    /// Start a session for a category.
    ///
    /// `max_questions` bounds how many questions are ever presented.
    #[must_use]
    pub fn start(
        catalog: &'a Catalog,
        category: impl Into<String>,
        demographics: Demographics,
        max_questions: u32,
    ) -> Self {
        let category = category.into();
        info!(
            category = %category,
            planned = catalog.interview_plan(&category).len(),
            max_questions,
            "Interview started"
        );
        Self {
            catalog,
            category,
            context: InterviewContext::new(demographics),
            pending: None,
            presented: Vec::new(),
            max_questions: usize::try_from(max_questions).unwrap_or(usize::MAX),
            differential_settled: false,
        }
    }

    /// The category this session was started for.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Current interview state.
    #[must_use]
    pub const fn context(&self) -> &InterviewContext {
        &self.context
    }

    /// Number of questions presented so far.
    #[must_use]
    pub fn questions_presented(&self) -> usize {
        self.presented.len()
    }

    /// The question waiting for an answer, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&Question> {
        self.pending.as_ref()
    }

    /// Whether enough information has been gathered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        has_enough_information(&self.context)
    }

    /// Present the next question, or `None` when the interview is over.
    ///
    /// An unanswered pending question is returned again. Otherwise the order is:
    /// a fired follow-up, the next unanswered question of the interview plan,
    /// then an adaptive question. Plan questions on a follow-up branch that was
    /// not taken are skipped, and once a differential answer adds no symptoms
    /// no further differential is offered.
    pub fn next_question(&mut self) -> Option<&Question> {
        if self.pending.is_none() {
            self.pending = self.select_next();
            if let Some(question) = &self.pending {
                debug!(question_id = %question.id, n = self.presented.len() + 1, "Presenting question");
                self.presented.push(question.id.clone());
            }
        }
        self.pending.as_ref()
    }

    fn select_next(&self) -> Option<Question> {
        if has_enough_information(&self.context) {
            return None;
        }
        if self.presented.len() >= self.max_questions {
            info!(max_questions = self.max_questions, "Question cap reached");
            return None;
        }

        follow_up_question(self.catalog, &self.context)
            .or_else(|| {
                self.catalog
                    .interview_plan(&self.category)
                    .into_iter()
                    .find(|q| {
                        !self.context.responses.contains(&q.id)
                            && !is_ruled_out(self.catalog, &self.context, &q.id)
                    })
            })
            .cloned()
            .or_else(|| {
                if self.differential_settled {
                    detail_question(self.catalog, &self.context)
                } else {
                    adaptive_question(self.catalog, &self.context)
                }
            })
    }

    /// Answer the pending question.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if nothing is pending or the answer does not
    /// fit the question (see [`validate_answer`]).
    pub fn answer(&mut self, answer: Answer) -> Result<(), EngineError> {
        let Some(question) = self.pending.as_ref() else {
            return Err(if self.is_complete() {
                EngineError::InterviewComplete
            } else {
                EngineError::NoPendingQuestion
            });
        };
        validate_answer(question, &answer)?;

        let selected_before = self.context.selected_symptoms.len();
        self.context = update_context(self.catalog, &self.context, &question.id, answer);
        if question.id.starts_with(DIFFERENTIAL_PREFIX)
            && self.context.selected_symptoms.len() == selected_before
        {
            debug!(question_id = %question.id, "Differential added no symptoms");
            self.differential_settled = true;
        }
        self.pending = None;
        Ok(())
    }

    /// Answer a specific question, which must be the pending one.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::QuestionMismatch`] if another question is pending,
    /// otherwise as [`answer`](Self::answer).
    pub fn answer_question(&mut self, question_id: &str, answer: Answer) -> Result<(), EngineError> {
        if let Some(pending) = &self.pending {
            if pending.id != question_id {
                return Err(EngineError::QuestionMismatch {
                    expected: pending.id.clone(),
                    actual: question_id.to_string(),
                });
            }
        }
        self.answer(answer)
    }

    /// Produce the diagnosis and the record to persist.
    ///
    /// Consumes the session; the context is not kept.
    #[must_use]
    pub fn finish(self, time: &dyn TimeProvider) -> (Vec<DiagnosticSuggestion>, AssessmentRecord) {
        let diagnosis = generate_diagnosis(&self.context);
        info!(
            category = %self.category,
            responses = self.context.responses.len(),
            primary = diagnosis.first().map_or("", |d| d.condition.as_str()),
            "Interview finished"
        );
        let record = AssessmentRecord::new(
            Uuid::new_v4().to_string(),
            self.category,
            self.context,
            diagnosis.clone(),
            time.now(),
        );
        (diagnosis, record)
    }
}

/// Check that an answer fits a question.
///
/// # Errors
///
/// - [`EngineError::AnswerRequired`] for a skipped required question
/// - [`EngineError::InvalidAnswer`] for a wrong answer kind or value
pub fn validate_answer(question: &Question, answer: &Answer) -> Result<(), EngineError> {
    let invalid = |reason: String| EngineError::InvalidAnswer {
        question_id: question.id.clone(),
        reason,
    };

    match (question.question_type, answer) {
        (_, Answer::Skipped) if question.required => Err(EngineError::AnswerRequired {
            question_id: question.id.clone(),
        }),
        (_, Answer::Skipped) => Ok(()),
        (QuestionType::Open | QuestionType::Duration, Answer::Text(text)) => {
            if text.trim().is_empty() {
                Err(invalid("answer must not be empty".to_string()))
            } else {
                Ok(())
            }
        }
        (QuestionType::Multiple | QuestionType::Binary, Answer::Choice(choice)) => {
            if question.choices().contains(&choice.as_str()) {
                Ok(())
            } else {
                Err(invalid(format!("'{choice}' is not one of the options")))
            }
        }
        (QuestionType::Symptoms, Answer::MultiChoice(ids)) => {
            match ids.iter().find(|id| question.symptom(id).is_none()) {
                Some(unknown) => Err(invalid(format!("unknown symptom '{unknown}'"))),
                None => Ok(()),
            }
        }
        (QuestionType::Scale, Answer::Scale(value)) => {
            if (SCALE_MIN..=SCALE_MAX).contains(value) {
                Ok(())
            } else {
                Err(invalid(format!(
                    "scale answers must be between {SCALE_MIN} and {SCALE_MAX}"
                )))
            }
        }
        (question_type, _) => Err(invalid(format!(
            "expected an answer for a {} question",
            question_type.as_str()
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::catalog::{CHEST_PAIN_CRUSHING, SEVERITY_QUESTION_ID, VERY_SUDDEN_ONSET};
    use crate::engine::DiagnosisSeverity;
    use crate::traits::MockTimeProvider;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn demographics() -> Demographics {
        Demographics::new("45", "female")
    }

    fn fixed_time() -> MockTimeProvider {
        let mut time = MockTimeProvider::new();
        time.expect_now()
            .returning(|| Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap());
        time
    }

    #[test]
    fn test_plan_is_walked_in_order() {
        let catalog = Catalog::builtin();
        let mut session = InterviewSession::start(&catalog, "respiratory", demographics(), 25);

        assert_eq!(session.next_question().unwrap().id, "chief_complaint");
        session.answer(Answer::Text("Coughing a lot".into())).unwrap();
        assert_eq!(session.next_question().unwrap().id, "symptom_onset");
        session.answer(Answer::Text("Four days ago".into())).unwrap();
        assert_eq!(session.next_question().unwrap().id, SEVERITY_QUESTION_ID);
        session.answer(Answer::Scale(4)).unwrap();
        assert_eq!(session.next_question().unwrap().id, "sudden_gradual");
        session
            .answer(Answer::Choice("Gradually over days".into()))
            .unwrap();
        assert_eq!(session.next_question().unwrap().id, "respiratory_symptoms");
        session
            .answer(Answer::MultiChoice(vec!["cough_dry".into(), "wheezing".into()]))
            .unwrap();

        assert!(session.is_complete());
        assert!(session.next_question().is_none());
        assert_eq!(session.questions_presented(), 5);

        let (diagnosis, record) = session.finish(&fixed_time());
        assert_eq!(diagnosis[0].condition, "Viral Upper Respiratory Infection");
        assert_eq!(diagnosis[0].severity, DiagnosisSeverity::Moderate);
        assert_eq!(record.category, "respiratory");
        assert_eq!(record.selected_symptoms, vec!["cough_dry", "wheezing"]);
        assert_eq!(record.diagnosis, diagnosis);
        assert_eq!(record.timestamp.to_rfc3339(), "2026-03-01T09:30:00+00:00");
    }

    #[test]
    fn test_sudden_onset_jumps_to_emergency_check() {
        let catalog = Catalog::builtin();
        let mut session = InterviewSession::start(&catalog, "neurological", demographics(), 25);
        session.next_question();
        session.answer(Answer::Text("Head pain".into())).unwrap();
        session.next_question();
        session.answer(Answer::Text("An hour ago".into())).unwrap();
        session.next_question();
        session.answer(Answer::Scale(5)).unwrap();
        session.next_question();
        session.answer(Answer::Choice(VERY_SUDDEN_ONSET.into())).unwrap();

        assert_eq!(session.next_question().unwrap().id, "emergency_check");
        session
            .answer(Answer::MultiChoice(vec!["severe_headache".into()]))
            .unwrap();
        assert!(session.next_question().is_none());

        let (diagnosis, _) = session.finish(&fixed_time());
        assert_eq!(diagnosis.len(), 1);
        assert_eq!(diagnosis[0].severity, DiagnosisSeverity::Emergency);
    }

    #[test]
    fn test_pending_question_is_repeated_until_answered() {
        let catalog = Catalog::builtin();
        let mut session = InterviewSession::start(&catalog, "general", demographics(), 25);
        let first = session.next_question().unwrap().id.clone();
        let again = session.next_question().unwrap().id.clone();
        assert_eq!(first, again);
        assert_eq!(session.questions_presented(), 1);
    }

    #[test]
    fn test_answer_without_pending_question() {
        let catalog = Catalog::builtin();
        let mut session = InterviewSession::start(&catalog, "general", demographics(), 25);
        assert_eq!(
            session.answer(Answer::Text("x".into())),
            Err(EngineError::NoPendingQuestion)
        );
    }

    #[test]
    fn test_answer_for_wrong_question() {
        let catalog = Catalog::builtin();
        let mut session = InterviewSession::start(&catalog, "general", demographics(), 25);
        session.next_question();
        let err = session
            .answer_question("symptom_onset", Answer::Text("today".into()))
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::QuestionMismatch {
                expected: "chief_complaint".to_string(),
                actual: "symptom_onset".to_string(),
            }
        );
        assert!(session.context().responses.is_empty());
    }

    #[test]
    fn test_required_question_cannot_be_skipped() {
        let catalog = Catalog::builtin();
        let mut session = InterviewSession::start(&catalog, "general", demographics(), 25);
        session.next_question();
        assert!(matches!(
            session.answer(Answer::Skipped),
            Err(EngineError::AnswerRequired { .. })
        ));
        assert!(session.pending().is_some());
    }

    #[test]
    fn test_question_cap_ends_interview() {
        let catalog = Catalog::builtin();
        let mut session = InterviewSession::start(&catalog, "cardiovascular", demographics(), 5);
        session.next_question();
        session.answer(Answer::Text("Chest discomfort".into())).unwrap();
        session.next_question();
        session.answer(Answer::Text("Yesterday".into())).unwrap();
        session.next_question();
        session.answer(Answer::Scale(3)).unwrap();
        session.next_question();
        session
            .answer(Answer::Choice("Gradually over hours".into()))
            .unwrap();
        session.next_question();
        session.answer(Answer::MultiChoice(vec![])).unwrap();

        assert!(!session.is_complete());
        assert!(session.next_question().is_none());
        assert_eq!(session.questions_presented(), 5);
    }

    #[test]
    fn test_empty_differential_is_not_repeated() {
        let catalog = Catalog::builtin();
        let mut session = InterviewSession::start(&catalog, "cardiovascular", demographics(), 25);
        for answer in [
            Answer::Text("Chest pressure".into()),
            Answer::Text("This morning".into()),
            Answer::Scale(5),
            Answer::Choice("Gradually over hours".into()),
            Answer::MultiChoice(vec![]),
            Answer::Choice(CHEST_PAIN_CRUSHING.into()),
        ] {
            session.next_question().unwrap();
            session.answer(answer).unwrap();
        }

        assert_eq!(session.next_question().unwrap().id, "heart_attack_symptoms");
        session.answer(Answer::Skipped).unwrap();
        assert_eq!(session.next_question().unwrap().id, "pain_radiation");
        session.answer(Answer::Skipped).unwrap();

        let differential = session.next_question().unwrap().id.clone();
        assert!(differential.starts_with(DIFFERENTIAL_PREFIX));
        session.answer(Answer::MultiChoice(vec![])).unwrap();

        assert!(session.next_question().is_none());
        assert_eq!(session.questions_presented(), 9);
        let (diagnosis, _) = session.finish(&fixed_time());
        assert_eq!(diagnosis[0].condition, "Heart Attack");
    }

    #[test]
    fn test_differential_with_new_symptom_completes() {
        let catalog = Catalog::builtin();
        let mut session = InterviewSession::start(&catalog, "cardiovascular", demographics(), 25);
        for answer in [
            Answer::Text("Chest pressure".into()),
            Answer::Text("This morning".into()),
            Answer::Scale(5),
            Answer::Choice("Gradually over hours".into()),
            Answer::MultiChoice(vec![]),
            Answer::Choice(CHEST_PAIN_CRUSHING.into()),
            Answer::Skipped,
            Answer::Skipped,
        ] {
            session.next_question().unwrap();
            session.answer(answer).unwrap();
        }

        session.next_question().unwrap();
        session.answer(Answer::MultiChoice(vec!["fever".into()])).unwrap();
        assert!(session.is_complete());
        assert!(session.next_question().is_none());
    }

    #[test]
    fn test_unknown_category_uses_initial_questions_only() {
        let catalog = Catalog::builtin();
        let mut session = InterviewSession::start(&catalog, "dermatology", demographics(), 25);
        for answer in [
            Answer::Text("Rash".into()),
            Answer::Text("A week".into()),
            Answer::Scale(2),
            Answer::Choice("Gradually over weeks".into()),
        ] {
            session.next_question().unwrap();
            session.answer(answer).unwrap();
        }
        assert!(session.next_question().is_none());
    }

    #[test]
    fn test_validate_answer_kinds() {
        let catalog = Catalog::builtin();
        let scale = catalog.find_question(SEVERITY_QUESTION_ID).unwrap();
        assert!(validate_answer(scale, &Answer::Scale(10)).is_ok());
        assert!(validate_answer(scale, &Answer::Scale(0)).is_err());
        assert!(validate_answer(scale, &Answer::Scale(11)).is_err());
        assert!(validate_answer(scale, &Answer::Text("7".into())).is_err());

        let choice = catalog.find_question("sudden_gradual").unwrap();
        assert!(validate_answer(choice, &Answer::Choice(VERY_SUDDEN_ONSET.into())).is_ok());
        assert!(validate_answer(choice, &Answer::Choice("Sometime".into())).is_err());

        let symptoms = catalog.find_question("general_symptoms").unwrap();
        assert!(validate_answer(symptoms, &Answer::MultiChoice(vec!["fever_low".into()])).is_ok());
        assert!(validate_answer(symptoms, &Answer::MultiChoice(vec!["cough_dry".into()])).is_err());

        let open = catalog.find_question("chief_complaint").unwrap();
        assert!(validate_answer(open, &Answer::Text("   ".into())).is_err());

        let optional = catalog.find_question("pain_radiation").unwrap();
        assert!(validate_answer(optional, &Answer::Skipped).is_ok());
    }
}
