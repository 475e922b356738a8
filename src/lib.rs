// src/lib.rs
// Public library surface for integration tests (and reuse by the dashboard backend).

pub mod backlog;
pub mod debug;
pub mod decision;
pub mod lexicon;
pub mod negation;
pub mod sentiment;
pub mod similarity;
pub mod text;

// Scoring pipeline (normalize → negation/tone → scores → decision)
pub mod analyze;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{default_classifier, Classifier, ReviewInput, ScoredReview};
pub use crate::decision::ClassificationResult;
pub use crate::lexicon::{Category, Lexicon};
pub use crate::sentiment::Sentiment;
pub use crate::similarity::jaro_winkler;

/// Classify one review with the embedded lexicon.
///
/// ```
/// use review_problem_classifier::{classify, Category};
///
/// let r = classify("Pessima", "L'app si blocca di continuo, crash ogni volta.");
/// assert!(r.categories.contains(&Category::TechnicalBug));
/// assert!((0.0..=1.0).contains(&r.confidence));
/// ```
pub fn classify(title: &str, body: &str) -> ClassificationResult {
    default_classifier().classify(title, body)
}

/// Classify many reviews with the embedded lexicon; output order matches input.
pub fn classify_batch(reviews: &[ReviewInput]) -> Vec<ClassificationResult> {
    default_classifier().classify_batch(reviews)
}

/// Selected categories only, embedded lexicon.
pub fn classify_categories(title: &str, body: &str) -> Vec<Category> {
    default_classifier().classify_categories(title, body)
}

pub fn classify_batch_categories(reviews: &[ReviewInput]) -> Vec<Vec<Category>> {
    default_classifier().classify_batch_categories(reviews)
}
