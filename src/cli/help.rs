//! Help text for CLI commands.

/// Get help text for CLI commands.
#[must_use]
pub const fn help_text() -> &'static str {
    r"Symptom Interview Commands:

  interview CATEGORY [options]
                      Run an adaptive symptom interview
    --age, -a AGE       Age of the person assessed
    --gender, -g G      Gender of the person assessed

  categories, list    List interview categories

  history [options]   Show recent assessments, newest first
    --limit, -l N       Maximum records to show (default: 10)

  show ID             Show one assessment in full

  delete, rm ID       Delete one assessment

  clear               Delete all stored assessments

  help                Show this message

Answering:
  Options are chosen by number. Symptom lists take comma-separated
  numbers, or 0 for none. Press Enter to skip optional questions.

Examples:
  symptom-interview interview respiratory --age 34 --gender female
  symptom-interview history --limit 5
  symptom-interview show 3f0c2b1e-...
  symptom-interview delete 3f0c2b1e-...

This tool does not replace professional medical advice.
"
}
