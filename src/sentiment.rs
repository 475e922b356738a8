use serde::{Deserialize, Serialize};

use crate::lexicon::ToneCues;

/// Coarse tone label returned with every classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

/// How many distinct positive/negative cue entries were found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToneCounts {
    pub positive: usize,
    pub negative: usize,
}

impl ToneCounts {
    /// Strictly greater side wins; ties are neutral.
    pub fn label(self) -> Sentiment {
        if self.positive > self.negative {
            Sentiment::Positive
        } else if self.negative > self.positive {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// Count cue entries occurring as substrings of the normalized text.
/// Each entry counts once, however often it appears.
pub fn count_tone_cues(normalized: &str, cues: &ToneCues) -> ToneCounts {
    let hits = |list: &[String]| list.iter().filter(|c| normalized.contains(c.as_str())).count();
    ToneCounts {
        positive: hits(cues.positive.as_slice()),
        negative: hits(cues.negative.as_slice()),
    }
}

pub fn detect_sentiment(normalized: &str, cues: &ToneCues) -> Sentiment {
    count_tone_cues(normalized, cues).label()
}
