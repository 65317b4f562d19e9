//! Symptom and question catalog.
//!
//! This module provides:
//! - Catalog entry types ([`Symptom`], [`Question`], [`Category`])
//! - The built-in question sets, loaded once by [`Catalog::builtin`]
//! - Lookup across categories by question or symptom id
//!
//! # Categories
//!
//! | Category | Contents |
//! |----------|----------|
//! | initial | Chief complaint, onset, severity, onset speed |
//! | emergency_symptoms | Red-flag screen |
//! | cardiovascular | Chest pain, palpitations, breathlessness |
//! | neurological | Headache, dizziness, cognition |
//! | respiratory | Cough, wheezing |
//! | gastrointestinal | Nausea, abdominal pain, bowel changes |
//! | musculoskeletal | Joint, muscle, back pain |
//! | general | Fever, fatigue, weight loss |

mod builtin;
mod types;

pub use types::{Category, FollowUpRule, Question, QuestionType, Symptom, SymptomSeverity};

/// Category whose questions open every interview.
pub const INITIAL_CATEGORY: &str = "initial";

/// The designated severity scale question.
pub const SEVERITY_QUESTION_ID: &str = "severity_overall";

/// The onset timing question.
pub const ONSET_QUESTION_ID: &str = "symptom_onset";

/// The onset speed question.
pub const ONSET_SPEED_QUESTION_ID: &str = "sudden_gradual";

/// Onset speed answer that signals an emergency.
pub const VERY_SUDDEN_ONSET: &str = "Very suddenly (within minutes)";

/// Chest pain quality answer pointing at a cardiac event.
pub const CHEST_PAIN_CRUSHING: &str = "Crushing or squeezing pressure";

/// Headache answer pointing at a thunderclap headache.
pub const WORST_HEADACHE: &str = "Worst headache of my life";

/// Categories a user can pick to start an interview.
pub const BODY_SYSTEM_CATEGORIES: [&str; 6] = [
    "cardiovascular",
    "neurological",
    "respiratory",
    "gastrointestinal",
    "musculoskeletal",
    "general",
];

/// Immutable registry of interview questions and symptoms.
///
/// Built once at startup and shared by reference; nothing mutates it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    discriminators: Vec<Symptom>,
}

impl Catalog {
    /// Create a catalog from explicit categories and discriminator symptoms.
    #[must_use]
    pub fn new(categories: Vec<Category>, discriminators: Vec<Symptom>) -> Self {
        Self {
            categories,
            discriminators,
        }
    }

    /// Create the catalog with the built-in question sets.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin::categories(), builtin::discriminators())
    }

    /// All categories in lookup order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category ids in lookup order.
    #[must_use]
    pub fn category_ids(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.id.as_str()).collect()
    }

    /// Whether a category with this id exists.
    #[must_use]
    pub fn has_category(&self, id: &str) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    /// Questions of one category, empty for unknown categories.
    #[must_use]
    pub fn questions_for(&self, category: &str) -> &[Question] {
        self.categories
            .iter()
            .find(|c| c.id == category)
            .map_or(&[], |c| c.questions.as_slice())
    }

    /// Initial questions followed by the category's own questions.
    ///
    /// Asking for the initial category itself does not repeat it.
    #[must_use]
    pub fn interview_plan(&self, category: &str) -> Vec<&Question> {
        let mut plan: Vec<&Question> = self.questions_for(INITIAL_CATEGORY).iter().collect();
        if category != INITIAL_CATEGORY {
            plan.extend(self.questions_for(category));
        }
        plan
    }

    /// Find a question by id across every category.
    #[must_use]
    pub fn find_question(&self, id: &str) -> Option<&Question> {
        self.categories
            .iter()
            .flat_map(|c| c.questions.iter())
            .find(|q| q.id == id)
    }

    /// Find a symptom by id across every question and the discriminator list.
    #[must_use]
    pub fn find_symptom(&self, id: &str) -> Option<&Symptom> {
        self.categories
            .iter()
            .flat_map(|c| c.questions.iter())
            .flat_map(|q| q.symptoms.iter())
            .chain(self.discriminators.iter())
            .find(|s| s.id == id)
    }

    /// Symptoms offered by differential questions.
    #[must_use]
    pub fn discriminators(&self) -> &[Symptom] {
        &self.discriminators
    }
}
