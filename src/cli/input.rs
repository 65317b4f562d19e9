//! Turning typed lines into answers.

use crate::catalog::{Question, QuestionType};
use crate::engine::Answer;
use crate::error::EngineError;

/// Parse one line of terminal input as an answer to `question`.
///
/// An empty line is a skip. Options and symptoms are picked by their
/// 1-based number; options may also be typed out. The result still has to
/// pass [`validate_answer`](crate::engine::validate_answer).
///
/// # Errors
///
/// Returns [`EngineError::InvalidAnswer`] if the line cannot be read as
/// the kind of answer the question expects.
pub fn parse_answer_line(question: &Question, line: &str) -> Result<Answer, EngineError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Answer::Skipped);
    }

    let invalid = |reason: &str| EngineError::InvalidAnswer {
        question_id: question.id.clone(),
        reason: reason.to_string(),
    };

    match question.question_type {
        QuestionType::Open | QuestionType::Duration => Ok(Answer::Text(line.to_string())),
        QuestionType::Scale => line
            .parse::<u8>()
            .map(Answer::Scale)
            .map_err(|_| invalid("enter a number from 1 to 10")),
        QuestionType::Multiple | QuestionType::Binary => {
            let choices = question.choices();
            let picked = line
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| choices.get(i).copied())
                .or_else(|| choices.iter().copied().find(|c| c.eq_ignore_ascii_case(line)));
            picked
                .map(|c| Answer::Choice(c.to_string()))
                .ok_or_else(|| invalid("enter the number of one of the options"))
        }
        QuestionType::Symptoms => {
            if line == "0" || line.eq_ignore_ascii_case("none") {
                return Ok(Answer::MultiChoice(Vec::new()));
            }
            let mut ids: Vec<String> = Vec::new();
            for part in line.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                let symptom = part
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| question.symptoms.get(i))
                    .ok_or_else(|| invalid("enter symptom numbers separated by commas, or 0"))?;
                if !ids.contains(&symptom.id) {
                    ids.push(symptom.id.clone());
                }
            }
            Ok(Answer::MultiChoice(ids))
        }
    }
}
