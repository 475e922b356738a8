//! Dev-only classification diagnostics.
//!
//! Gate: `CLASSIFIER_DEV_LOG=1` AND a dev build (debug assertions, or
//! `APP_ENV` in {local, development, dev}). The gate is read once when a
//! [`Classifier`](crate::Classifier) is built. Raw review text is never logged,
//! only a short hashed id.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use tracing::debug;

use crate::decision::ClassificationResult;
use crate::lexicon::Category;

pub const ENV_DEV_LOG: &str = "CLASSIFIER_DEV_LOG";

pub(crate) fn dev_logging_enabled() -> bool {
    let on = std::env::var(ENV_DEV_LOG).ok().as_deref() == Some("1");
    if !on {
        return false;
    }
    if cfg!(debug_assertions) {
        return true;
    }
    matches!(
        std::env::var("APP_ENV")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "local" | "development" | "dev"
    )
}

/// First 6 bytes of SHA-256, hex.
pub(crate) fn anon_hash(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

/// Fields of the `classified` event. Holds nothing derived from the raw text
/// except its hash.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ClassificationTrace {
    pub id: String,
    pub word_count: usize,
    pub scores: Vec<String>,
    pub selected: Vec<&'static str>,
}

impl ClassificationTrace {
    pub(crate) fn new(
        normalized: &str,
        word_count: usize,
        scores: &BTreeMap<Category, f64>,
        result: &ClassificationResult,
    ) -> Self {
        Self {
            id: anon_hash(normalized),
            word_count,
            scores: scores.iter().map(|(c, s)| format!("{c}={s}")).collect(),
            selected: result.categories.iter().map(|c| c.as_str()).collect(),
        }
    }
}

/// Callers check the gate; this only emits.
pub(crate) fn dev_log_classification(
    normalized: &str,
    word_count: usize,
    scores: &BTreeMap<Category, f64>,
    result: &ClassificationResult,
) {
    let trace = ClassificationTrace::new(normalized, word_count, scores, result);
    debug!(
        target: "classifier",
        id = %trace.id,
        word_count = trace.word_count,
        confidence = result.confidence,
        needs_review = result.needs_review,
        sentiment = ?result.sentiment,
        scores = ?trace.scores,
        selected = ?trace.selected,
        "classified"
    );
}
