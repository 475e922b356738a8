// src/lexicon.rs
//! Problem categories and the static lexicon that drives scoring.
//!
//! The lexicon is locale data loaded from TOML. The default Italian lexicon is
//! embedded at build time (`config/lexicon.it.toml`); a custom one can be supplied
//! through `CLASSIFIER_LEXICON_PATH` or loaded explicitly with [`Lexicon::from_path`].
//!
//! TOML shape:
//! ```toml
//! suffixes = ["azione", "ato"]          # stemmer, first match wins
//! negation_cues = ["non", "mai"]
//!
//! [tone]
//! positive = ["finalmente", "ora funziona"]
//! negative = ["purtroppo"]
//!
//! [categories.TECHNICAL_BUG]
//! phrases = ["si blocca"]
//! keywords = ["crash", "bug"]
//! # ... one table for each of the five categories
//! ```
//!
//! Entries must already be in normalized form (lowercase ASCII letters, digits and
//! single spaces), otherwise they could never match and loading fails.

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

// --- env names ---
pub const ENV_LEXICON_PATH: &str = "CLASSIFIER_LEXICON_PATH";

static EMBEDDED_TOML: &str = include_str!("../config/lexicon.it.toml");

static EMBEDDED: Lazy<Lexicon> = Lazy::new(|| {
    Lexicon::from_toml_str(EMBEDDED_TOML).expect("valid embedded lexicon (config/lexicon.it.toml)")
});

static RE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9]+$").expect("word regex"));
static RE_PHRASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+( [a-z0-9]+)*$").expect("phrase regex"));

/// Closed problem taxonomy. Declaration order is the canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    TechnicalBug,
    Onboarding,
    Usability,
    MissingFeature,
    Support,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::TechnicalBug,
        Category::Onboarding,
        Category::Usability,
        Category::MissingFeature,
        Category::Support,
    ];

    /// Stable identifier, same as the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::TechnicalBug => "TECHNICAL_BUG",
            Category::Onboarding => "ONBOARDING",
            Category::Usability => "USABILITY",
            Category::MissingFeature => "MISSING_FEATURE",
            Category::Support => "SUPPORT",
        }
    }

    /// Short human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Category::TechnicalBug => "Technical bugs",
            Category::Onboarding => "Onboarding & setup",
            Category::Usability => "UX & usability",
            Category::MissingFeature => "Missing features",
            Category::Support => "Customer support",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("unknown category `{s}`"))
    }
}

/// Phrase and keyword lists for one category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryLexicon {
    /// Multi-word entries, substring-matched against the normalized text.
    #[serde(default)]
    pub phrases: Vec<String>,
    /// Single words or stems, matched per token.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Tone cues used for the coarse sentiment label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToneCues {
    #[serde(default)]
    pub positive: Vec<String>,
    #[serde(default)]
    pub negative: Vec<String>,
}

/// Validated lexicon. Immutable once handed to a classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    pub suffixes: Vec<String>,
    pub negation_cues: Vec<String>,
    pub tone: ToneCues,
    pub categories: BTreeMap<Category, CategoryLexicon>,
}

/// On-disk shape; category tables are keyed by their identifier.
#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    suffixes: Vec<String>,
    negation_cues: Vec<String>,
    #[serde(default)]
    tone: ToneCues,
    #[serde(default)]
    categories: BTreeMap<String, CategoryLexicon>,
}

impl Lexicon {
    /// The embedded Italian lexicon, parsed once per process.
    pub fn embedded() -> &'static Lexicon {
        &EMBEDDED
    }

    /// Parse and validate a TOML lexicon.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let file: LexiconFile = toml::from_str(toml_str).context("parsing lexicon TOML")?;
        let categories = file
            .categories
            .into_iter()
            .map(|(name, lists)| Ok((name.parse::<Category>()?, lists)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        let lex = Lexicon {
            suffixes: file.suffixes,
            negation_cues: file.negation_cues,
            tone: file.tone,
            categories,
        };
        lex.validate()?;
        Ok(lex)
    }

    /// Load from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading lexicon from {}", path.display()))?;
        let lex = Self::from_toml_str(&content)
            .with_context(|| format!("loading lexicon {}", path.display()))?;
        lex.log_loaded(&path.display().to_string());
        Ok(lex)
    }

    /// Uses `CLASSIFIER_LEXICON_PATH` when set, otherwise the embedded lexicon.
    pub fn from_env() -> Result<Self> {
        match std::env::var(ENV_LEXICON_PATH) {
            Ok(p) if !p.trim().is_empty() => Self::from_path(&PathBuf::from(p.trim())),
            _ => {
                let lex = Self::embedded().clone();
                lex.log_loaded("embedded");
                Ok(lex)
            }
        }
    }

    /// Lists for `category`. Always present once validated.
    pub fn category(&self, category: Category) -> Option<&CategoryLexicon> {
        self.categories.get(&category)
    }

    pub fn phrase_count(&self) -> usize {
        self.categories.values().map(|c| c.phrases.len()).sum()
    }

    pub fn keyword_count(&self) -> usize {
        self.categories.values().map(|c| c.keywords.len()).sum()
    }

    fn log_loaded(&self, source: &str) {
        info!(
            target: "classifier",
            source,
            phrases = self.phrase_count(),
            keywords = self.keyword_count(),
            suffixes = self.suffixes.len(),
            "lexicon loaded"
        );
    }

    fn validate(&self) -> Result<()> {
        if self.negation_cues.is_empty() {
            bail!("lexicon must define at least one negation cue");
        }
        for cat in Category::ALL {
            if !self.categories.contains_key(&cat) {
                bail!("lexicon is missing category `{cat}`");
            }
        }

        check_all("suffixes", &self.suffixes, &RE_WORD)?;
        check_all("negation_cues", &self.negation_cues, &RE_WORD)?;
        check_all("tone.positive", &self.tone.positive, &RE_PHRASE)?;
        check_all("tone.negative", &self.tone.negative, &RE_PHRASE)?;
        for (cat, lists) in &self.categories {
            check_all(&format!("{cat}.phrases"), &lists.phrases, &RE_PHRASE)?;
            check_all(&format!("{cat}.keywords"), &lists.keywords, &RE_WORD)?;
        }
        Ok(())
    }
}

fn check_all(field: &str, entries: &[String], re: &Regex) -> Result<()> {
    for e in entries {
        if !re.is_match(e) {
            bail!("lexicon `{field}`: entry {e:?} is not in normalized form");
        }
    }
    Ok(())
}
