//! Phrase matching against a single sentiment dictionary.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Acceptance cutoff for the fuzzy similarity path.
const SIMILARITY_THRESHOLD: f64 = 0.85;

/// Scored metadata attached to one dictionary phrase.
///
/// Deserialization accepts the wordbank's original Chinese field names as
/// aliases, so existing dictionary files load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentEntry {
    /// How subjective the phrase is, in `[0, 1]`.
    #[serde(alias = "主观性")]
    pub subjectivity: f64,
    /// Emotional intensity, `>= 0`.
    #[serde(alias = "情绪强度")]
    pub emotion_intensity: f64,
    /// Emotion labels, e.g. 喜悦 / 厌恶.
    #[serde(alias = "情绪")]
    pub emotions: Vec<String>,
    /// Structural tags, e.g. 夸奖 / 批评.
    #[serde(alias = "结构标签")]
    pub structural_tags: Vec<String>,
}

/// One wordbank file: phrase → entry, in file order. Dictionaries from
/// different files are kept separate, never merged into one key space.
pub type SentimentDictionary = IndexMap<String, SentimentEntry>;

/// Collect every dictionary entry the comment matches.
///
/// The comment must already be normalized and canonicalized. Each phrase is
/// tried by substring containment first; only when that fails is the phrase
/// compared against the whole comment with a normalized Levenshtein ratio,
/// accepted at [`SIMILARITY_THRESHOLD`] or above. The whole comment is the
/// single fuzzy candidate, there is no sliding-window scan. One phrase key
/// contributes at most one entry, so the result never exceeds the
/// dictionary's key count.
pub fn match_phrases(comment: &str, dictionary: &SentimentDictionary) -> Vec<SentimentEntry> {
    let mut matched = Vec::new();
    for (phrase, entry) in dictionary {
        if comment.contains(phrase.as_str()) {
            matched.push(entry.clone());
        } else if strsim::normalized_levenshtein(phrase, comment) >= SIMILARITY_THRESHOLD {
            matched.push(entry.clone());
        }
    }
    matched
}
