// src/negation.rs
//! Single-word negation heuristic.
//!
//! A negation cue followed by whitespace negates exactly the next word. Matches are
//! non-overlapping, so in "non non bug" only the second "non" is negated.

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct NegationDetector {
    re: Regex,
}

impl NegationDetector {
    /// Compile a detector for the given cue words.
    pub fn new<S: AsRef<str>>(cues: &[S]) -> Result<Self> {
        if cues.is_empty() {
            anyhow::bail!("negation detector needs at least one cue");
        }
        let alternation = cues
            .iter()
            .map(|c| regex::escape(c.as_ref()))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"(?:^|\s)({alternation})\s+(\w+)");
        let re = Regex::new(&pattern)
            .with_context(|| format!("compiling negation pattern `{pattern}`"))?;
        Ok(Self { re })
    }

    /// Words directly preceded by a cue in `normalized` (deduplicated).
    pub fn negated_words(&self, normalized: &str) -> BTreeSet<String> {
        self.re
            .captures_iter(normalized)
            .filter_map(|caps| caps.get(2))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
