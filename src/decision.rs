//! decision.rs: thresholding, confidence and the public result shape.
//!
//! The engine is multi-label: every category whose score reaches
//! `max(max_score * 0.4, 0.5)` is selected, not just the argmax. Confidence is
//! evidence density, `max_score / max(word_count * 0.1, 1)`, capped at 1.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::analyze::scoring::CategoryScores;
use crate::lexicon::Category;
use crate::sentiment::Sentiment;

/// Fraction of the top score a category needs to be selected.
pub const RELATIVE_THRESHOLD: f64 = 0.4;
/// Absolute floor for the selection threshold.
pub const MIN_THRESHOLD: f64 = 0.5;
/// Per-word scale of the confidence denominator.
pub const DENSITY_PER_WORD: f64 = 0.1;
/// Below this confidence a result is flagged for manual review.
pub const REVIEW_CONFIDENCE: f64 = 0.3;

/// Outcome of classifying one review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// Selected categories (canonical order when iterated).
    pub categories: BTreeSet<Category>,
    /// Matched lexicon entries, only for selected categories.
    pub evidence: BTreeMap<Category, Vec<String>>,
    /// Evidence density in <0.0, 1.0>.
    pub confidence: f64,
    pub needs_review: bool,
    pub sentiment: Sentiment,
}

impl ClassificationResult {
    /// "Don't know": nothing selected, zero confidence.
    pub fn empty(sentiment: Sentiment) -> Self {
        Self {
            categories: BTreeSet::new(),
            evidence: BTreeMap::new(),
            confidence: 0.0,
            needs_review: true,
            sentiment,
        }
    }

    pub fn has(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Selected categories as a vector, canonical order.
    pub fn category_list(&self) -> Vec<Category> {
        self.categories.iter().copied().collect()
    }
}

/// Selection threshold for a given top score.
pub fn threshold_for(max_score: f64) -> f64 {
    (max_score * RELATIVE_THRESHOLD).max(MIN_THRESHOLD)
}

/// Evidence density relative to document length, capped at 1.
pub fn confidence_for(max_score: f64, word_count: usize) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    let denom = (word_count as f64 * DENSITY_PER_WORD).max(1.0);
    (max_score / denom).clamp(0.0, 1.0)
}

/// Turn (already sentiment-adjusted) scores into the final result.
pub fn decide(scores: CategoryScores, word_count: usize, sentiment: Sentiment) -> ClassificationResult {
    if scores.is_empty() {
        return ClassificationResult::empty(sentiment);
    }

    let max_score = scores.max_score();
    let threshold = threshold_for(max_score);

    let categories: BTreeSet<Category> = scores
        .scores
        .iter()
        .filter(|(_, s)| **s >= threshold)
        .map(|(c, _)| *c)
        .collect();

    let CategoryScores { mut evidence, .. } = scores;
    evidence.retain(|c, hits| categories.contains(c) && !hits.is_empty());

    let confidence = confidence_for(max_score, word_count);
    let needs_review = confidence < REVIEW_CONFIDENCE || categories.is_empty();

    ClassificationResult {
        categories,
        evidence,
        confidence,
        needs_review,
        sentiment,
    }
}
