//! Category scoring: weighted phrase and keyword hits per category.
//!
//! - phrase found as a substring of the normalized text → `PHRASE_WEIGHT`
//! - keyword matched against any token / stem → `KEYWORD_WEIGHT`
//!
//! Hits whose words are negated are skipped. Categories without hits are absent
//! from [`CategoryScores`], not zero.

use std::collections::{BTreeMap, BTreeSet};

use crate::lexicon::{Category, Lexicon};
use crate::sentiment::Sentiment;
use crate::similarity::fuzzy_match;
use crate::text::{soft_stem, tokenize};

pub const PHRASE_WEIGHT: f64 = 3.0;
pub const KEYWORD_WEIGHT: f64 = 1.0;

/// Positive tone scales the technical-bug score by this factor.
pub const POSITIVE_BUG_DAMPING: f64 = 0.5;
/// A damped technical-bug score below this is dropped entirely.
pub const DAMPED_BUG_FLOOR: f64 = 1.0;

/// A normalized document prepared for scoring.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    pub normalized: &'a str,
    pub tokens: Vec<&'a str>,
    pub stems: Vec<&'a str>,
    pub negated: BTreeSet<String>,
}

impl<'a> Document<'a> {
    pub fn new(normalized: &'a str, lexicon: &Lexicon, negated: BTreeSet<String>) -> Self {
        let tokens: Vec<&str> = tokenize(normalized).collect();
        let stems = tokens
            .iter()
            .map(|&t| soft_stem(t, &lexicon.suffixes))
            .collect();
        Self {
            normalized,
            tokens,
            stems,
            negated,
        }
    }

    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }

    /// Any stem fuzzy-matches, or any raw token equals / extends / prefixes the keyword.
    fn has_keyword(&self, keyword: &str) -> bool {
        self.stems.iter().any(|s| fuzzy_match(s, keyword))
            || self
                .tokens
                .iter()
                .any(|t| *t == keyword || t.starts_with(keyword) || keyword.starts_with(t))
    }

    fn phrase_negated(&self, phrase: &str) -> bool {
        phrase.split(' ').any(|w| self.negated.contains(w))
    }
}

/// Per-category score and matched lexicon entries, canonical order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryScores {
    pub scores: BTreeMap<Category, f64>,
    pub evidence: BTreeMap<Category, Vec<String>>,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> Option<f64> {
        self.scores.get(&category).copied()
    }

    /// Highest score, or 0 when nothing matched.
    pub fn max_score(&self) -> f64 {
        self.scores.values().copied().fold(0.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    fn remove(&mut self, category: Category) {
        self.scores.remove(&category);
        self.evidence.remove(&category);
    }
}

/// Score every category of `lexicon` against `doc`.
pub fn score_categories(doc: &Document<'_>, lexicon: &Lexicon) -> CategoryScores {
    let mut out = CategoryScores::default();

    for cat in Category::ALL {
        let Some(lists) = lexicon.category(cat) else {
            continue;
        };
        let mut score = 0.0;
        let mut hits: Vec<String> = Vec::new();

        for phrase in &lists.phrases {
            if !doc.normalized.contains(phrase.as_str()) || doc.phrase_negated(phrase) {
                continue;
            }
            score += PHRASE_WEIGHT;
            hits.push(phrase.clone());
        }

        for kw in &lists.keywords {
            if !doc.has_keyword(kw) || doc.negated.contains(kw.as_str()) {
                continue;
            }
            score += KEYWORD_WEIGHT;
            hits.push(kw.clone());
        }

        if score > 0.0 {
            out.scores.insert(cat, score);
            out.evidence.insert(cat, hits);
        }
    }

    out
}

/// Positive tone halves the technical-bug score; below the floor it is dropped
/// together with its evidence. Other categories are left alone.
pub fn apply_sentiment_adjustment(scores: &mut CategoryScores, sentiment: Sentiment) {
    if sentiment != Sentiment::Positive {
        return;
    }
    let Some(bug) = scores.scores.get_mut(&Category::TechnicalBug) else {
        return;
    };
    *bug *= POSITIVE_BUG_DAMPING;
    if *bug < DAMPED_BUG_FLOOR {
        scores.remove(Category::TechnicalBug);
    }
}
