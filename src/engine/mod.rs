//! Adaptive interview engine.
//!
//! This module provides:
//! - [`InterviewContext`]: state accumulated over one assessment
//! - [`next_question`]: question sequencing with follow-up rules and
//!   adaptive question synthesis
//! - [`update_context`]: answer recording and condition inference
//! - [`generate_diagnosis`]: severity classification and ranked suggestions
//! - [`InterviewSession`]: the validating boundary a host drives
//!
//! Everything except [`InterviewSession`] is a pure function over an explicit
//! [`Catalog`](crate::catalog::Catalog) and context. Nothing here does I/O.
//!
//! # Example
//!
//! ```
//! use symptom_interview::catalog::Catalog;
//! use symptom_interview::engine::{
//!     generate_diagnosis, update_context, Answer, Demographics, InterviewContext,
//! };
//!
//! let catalog = Catalog::builtin();
//! let context = InterviewContext::new(Demographics::new("30", "female"));
//! let context = update_context(&catalog, &context, "severity_overall", Answer::Scale(3));
//! let context = update_context(
//!     &catalog,
//!     &context,
//!     "gastrointestinal_symptoms",
//!     Answer::MultiChoice(vec!["nausea_mild".to_string()]),
//! );
//!
//! let diagnosis = generate_diagnosis(&context);
//! assert_eq!(diagnosis[0].condition, "Gastroenteritis");
//! ```

mod context;
mod diagnosis;
mod inference;
mod sequencer;
mod session;

pub use context::{Answer, Demographics, InterviewContext, ResponseEntry, Responses};
pub use diagnosis::{
    classify_severity, generate_diagnosis, has_emergency_indicators, primary_probability,
    DiagnosisSeverity, DiagnosticSuggestion, EMERGENCY_SEVERITY, EMERGENCY_SYMPTOMS,
    MAX_ALTERNATIVES,
};
pub use inference::{infer_suspected_conditions, update_context, PatternRule, PATTERN_RULES};
pub use sequencer::{
    adaptive_question, detail_question, follow_up_question, has_enough_information,
    is_ruled_out, next_question, resolve_follow_up, DETAIL_OPTIONS, DIFFERENTIAL_PREFIX,
    MIN_RESPONSES,
};
pub use session::{validate_answer, InterviewSession, SCALE_MAX, SCALE_MIN};
