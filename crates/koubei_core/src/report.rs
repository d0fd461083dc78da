//! Aggregation of matched entries into one scoring report.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::matcher::SentimentEntry;

/// Aggregated scoring result for one comment.
///
/// Field declaration order is the display order. Created fresh per analyzed
/// comment; a zero report (all fields empty/0) means nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub subjectivity: f64,
    pub emotion_intensity: f64,
    pub emotions: BTreeSet<String>,
    pub structural_tags: BTreeSet<String>,
    pub match_count: usize,
}

/// Merge the match sets from every dictionary into one [`Report`].
///
/// Scores are arithmetic means over all matched entries, rounded to two
/// decimal places half away from zero; label sets are unions. An empty
/// combined match set yields the zero report rather than an error — the
/// mean of nothing is defined as 0.0.
pub fn aggregate(match_sets: &[Vec<SentimentEntry>]) -> Report {
    let entries: Vec<&SentimentEntry> = match_sets.iter().flatten().collect();
    if entries.is_empty() {
        return Report::default();
    }

    let n = entries.len() as f64;
    let subjectivity = entries.iter().map(|e| e.subjectivity).sum::<f64>() / n;
    let emotion_intensity = entries.iter().map(|e| e.emotion_intensity).sum::<f64>() / n;

    Report {
        subjectivity: round2(subjectivity),
        emotion_intensity: round2(emotion_intensity),
        emotions: entries
            .iter()
            .flat_map(|e| e.emotions.iter().cloned())
            .collect(),
        structural_tags: entries
            .iter()
            .flat_map(|e| e.structural_tags.iter().cloned())
            .collect(),
        match_count: entries.len(),
    }
}

/// Round to two decimal places, half away from zero.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "主观性: {}", self.subjectivity)?;
        writeln!(f, "情绪强度: {}", self.emotion_intensity)?;
        writeln!(f, "情绪: [{}]", join(&self.emotions))?;
        writeln!(f, "结构标签: [{}]", join(&self.structural_tags))?;
        write!(f, "匹配数量: {}", self.match_count)
    }
}

fn join(set: &BTreeSet<String>) -> String {
    set.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}
