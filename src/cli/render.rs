//! Plain-text rendering for the terminal host.

use std::fmt::Write;

use crate::catalog::{Question, QuestionType};
use crate::engine::DiagnosticSuggestion;
use crate::storage::AssessmentRecord;

/// Render a question with numbered options or symptoms.
#[must_use]
pub fn format_question(number: usize, question: &Question) -> String {
    let mut out = format!("\n{number}. {}", question.text);
    if !question.required {
        out.push_str(" (optional)");
    }
    out.push('\n');

    match question.question_type {
        QuestionType::Scale => out.push_str("   Enter a number from 1 (mild) to 10 (severe).\n"),
        QuestionType::Multiple | QuestionType::Binary => {
            for (i, choice) in question.choices().iter().enumerate() {
                let _ = writeln!(out, "   {}) {choice}", i + 1);
            }
        }
        QuestionType::Symptoms => {
            for (i, symptom) in question.symptoms.iter().enumerate() {
                let _ = writeln!(out, "   {}) {} - {}", i + 1, symptom.name, symptom.description);
            }
            out.push_str("   0) None of these\n");
        }
        QuestionType::Open | QuestionType::Duration => {}
    }
    out
}

/// Render ranked suggestions.
#[must_use]
pub fn format_diagnosis(suggestions: &[DiagnosticSuggestion]) -> String {
    let mut out = String::from("\nAssessment results\n==================\n");
    for (rank, s) in suggestions.iter().enumerate() {
        let label = if rank == 0 { "Most likely" } else { "Also consider" };
        let _ = writeln!(
            out,
            "\n{label}: {} ({}%, {})",
            s.condition, s.probability, s.severity
        );
        let _ = writeln!(out, "  {}", s.reasoning);
        if rank == 0 {
            for r in &s.recommendations {
                let _ = writeln!(out, "  - {r}");
            }
        }
        let _ = writeln!(out, "  When to seek care: {}", s.when_to_seek_care);
    }
    out.push_str("\nThis is not a medical diagnosis. Consult a healthcare professional.\n");
    out
}

/// One-line summary of a stored assessment.
#[must_use]
pub fn format_history_line(record: &AssessmentRecord) -> String {
    let primary = record
        .primary()
        .map_or_else(|| "no result".to_string(), |d| format!("{} ({})", d.condition, d.severity));
    format!(
        "{}  {}  {:<16}  {primary}",
        record.id,
        record.timestamp.format("%Y-%m-%d %H:%M"),
        record.category
    )
}

/// Full rendering of a stored assessment.
#[must_use]
pub fn format_record(record: &AssessmentRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Assessment {}", record.id);
    let _ = writeln!(out, "Date:     {}", record.timestamp.to_rfc3339());
    let _ = writeln!(out, "Category: {}", record.category);
    let _ = writeln!(
        out,
        "Person:   age {}, gender {}",
        record.demographics.age, record.demographics.gender
    );
    out.push_str("\nResponses:\n");
    for entry in record.responses.iter() {
        let _ = writeln!(out, "  {}: {}", entry.question_id, entry.answer.display());
    }
    if !record.selected_symptoms.is_empty() {
        let _ = writeln!(out, "\nSymptoms: {}", record.selected_symptoms.join(", "));
    }
    out.push_str(&format_diagnosis(&record.diagnosis));
    out
}
