// src/analyze/mod.rs
//! Classification pipeline entry.
//!
//! Order:
//! 1) normalize `title + " " + body`, tokenize, stem
//! 2) negated words + coarse tone
//! 3) category scores (phrases, keywords), then positive-tone damping of TECHNICAL_BUG
//! 4) threshold / confidence / needs-review
//!
//! A [`Classifier`] is immutable once built and can be shared across threads freely.
//! Whether it emits dev diagnostics is decided at construction.

pub mod scoring;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::debug::{dev_log_classification, dev_logging_enabled};
use crate::decision::{decide, ClassificationResult};
use crate::lexicon::{Category, Lexicon};
use crate::negation::NegationDetector;
use crate::sentiment::{detect_sentiment, Sentiment};
use crate::text::normalize;

pub use crate::analyze::scoring::{
    apply_sentiment_adjustment, score_categories, CategoryScores, Document,
};

static DEFAULT_CLASSIFIER: Lazy<Classifier> = Lazy::new(|| {
    Classifier::new(Lexicon::embedded().clone()).expect("embedded lexicon compiles")
});

/// One review to classify.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewInput {
    #[serde(default)]
    pub title: String,
    /// Review text; `review` is accepted as an alias.
    #[serde(default, alias = "review")]
    pub body: String,
}

impl ReviewInput {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Everything computed before thresholding. Useful for explaining a result.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredReview {
    pub normalized: String,
    pub word_count: usize,
    pub negated: BTreeSet<String>,
    pub sentiment: Sentiment,
    /// Scores after the sentiment adjustment.
    pub scores: CategoryScores,
}

#[derive(Debug, Clone)]
pub struct Classifier {
    lexicon: Lexicon,
    negation: NegationDetector,
    dev_log: bool,
}

impl Classifier {
    pub fn new(lexicon: Lexicon) -> anyhow::Result<Self> {
        let negation = NegationDetector::new(&lexicon.negation_cues)?;
        Ok(Self {
            lexicon,
            negation,
            dev_log: dev_logging_enabled(),
        })
    }

    /// Build from an inline TOML lexicon.
    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        Self::new(Lexicon::from_toml_str(toml_str)?)
    }

    /// Lexicon from `CLASSIFIER_LEXICON_PATH`, else the embedded one.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(Lexicon::from_env()?)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Steps 1-3 of the pipeline.
    pub fn score(&self, title: &str, body: &str) -> ScoredReview {
        let normalized = normalize(&format!("{title} {body}"));
        let negated = self.negation.negated_words(&normalized);
        let sentiment = detect_sentiment(&normalized, &self.lexicon.tone);

        let doc = Document::new(&normalized, &self.lexicon, negated);
        let mut scores = score_categories(&doc, &self.lexicon);
        apply_sentiment_adjustment(&mut scores, sentiment);

        let word_count = doc.word_count();
        let Document { negated, .. } = doc;
        ScoredReview {
            normalized,
            word_count,
            negated,
            sentiment,
            scores,
        }
    }

    /// Classify one review.
    pub fn classify(&self, title: &str, body: &str) -> ClassificationResult {
        let scored = self.score(title, body);
        let ScoredReview {
            normalized,
            word_count,
            sentiment,
            scores,
            ..
        } = scored;

        let snapshot = self.dev_log.then(|| scores.scores.clone());
        let result = decide(scores, word_count, sentiment);
        if let Some(score_map) = snapshot {
            dev_log_classification(&normalized, word_count, &score_map, &result);
        }
        result
    }

    pub fn classify_input(&self, input: &ReviewInput) -> ClassificationResult {
        self.classify(&input.title, &input.body)
    }

    /// One result per input, same order. Items are independent.
    pub fn classify_batch(&self, reviews: &[ReviewInput]) -> Vec<ClassificationResult> {
        reviews.iter().map(|r| self.classify_input(r)).collect()
    }

    /// Selected categories only, canonical order.
    pub fn classify_categories(&self, title: &str, body: &str) -> Vec<Category> {
        self.classify(title, body).category_list()
    }

    pub fn classify_batch_categories(&self, reviews: &[ReviewInput]) -> Vec<Vec<Category>> {
        reviews
            .iter()
            .map(|r| self.classify_categories(&r.title, &r.body))
            .collect()
    }
}

/// Process-wide classifier over the embedded lexicon.
pub fn default_classifier() -> &'static Classifier {
    &DEFAULT_CLASSIFIER
}
