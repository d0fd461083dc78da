//! Top-level analysis entry point.

use crate::canonical::{canonicalize, ExpressionGroups};
use crate::matcher::{match_phrases, SentimentDictionary};
use crate::normalize::normalize_charset;
use crate::report::{aggregate, Report};

/// Immutable bundle of everything loaded at startup.
///
/// Built once from the wordbank, then shared read-only for the process
/// lifetime; `analyze` holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    groups: ExpressionGroups,
    dictionaries: Vec<SentimentDictionary>,
}

impl Analyzer {
    pub fn new(groups: ExpressionGroups, dictionaries: Vec<SentimentDictionary>) -> Self {
        Self {
            groups,
            dictionaries,
        }
    }

    /// Score one raw comment against every loaded dictionary.
    ///
    /// Runs the full pipeline: charset normalization, expression
    /// canonicalization, per-dictionary phrase matching, aggregation.
    pub fn analyze(&self, comment: &str) -> Report {
        let normalized = normalize_charset(comment);
        let canonical = canonicalize(&normalized, &self.groups);

        let match_sets: Vec<_> = self
            .dictionaries
            .iter()
            .map(|dict| match_phrases(&canonical, dict))
            .collect();

        let report = aggregate(&match_sets);
        tracing::debug!(match_count = report.match_count, "analyzed comment");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::SentimentEntry;
    use indexmap::indexmap;

    fn sample_analyzer() -> Analyzer {
        let groups = ExpressionGroups::new(indexmap! {
            "很好".to_string() => vec!["太好了".to_string(), "真不错".to_string()],
        });
        let praise: SentimentDictionary = indexmap! {
            "很好".to_string() => SentimentEntry {
                subjectivity: 0.8,
                emotion_intensity: 0.7,
                emotions: vec!["喜悦".to_string()],
                structural_tags: vec!["夸奖".to_string()],
            },
        };
        let complaint: SentimentDictionary = indexmap! {
            "失望".to_string() => SentimentEntry {
                subjectivity: 0.9,
                emotion_intensity: 0.6,
                emotions: vec!["沮丧".to_string()],
                structural_tags: vec!["批评".to_string()],
            },
        };
        Analyzer::new(groups, vec![praise, complaint])
    }

    #[test]
    fn test_full_pipeline_via_canonical_group() {
        // Punctuation stripped, variant collapses to 很好, praise dict hits
        let report = sample_analyzer().analyze("太好了！！");
        assert_eq!(report.match_count, 1);
        assert_eq!(report.subjectivity, 0.8);
        assert!(report.emotions.contains("喜悦"));
    }

    #[test]
    fn test_full_pipeline_via_filler_stripping() {
        // No variant; 我/了 stripped, 失望 remains as a substring
        let report = sample_analyzer().analyze("我太失望了");
        assert_eq!(report.match_count, 1);
        assert!(report.structural_tags.contains("批评"));
    }

    #[test]
    fn test_empty_comment_yields_zero_report() {
        let report = sample_analyzer().analyze("");
        assert_eq!(report, Report::default());
    }

    #[test]
    fn test_whitespace_only_yields_zero_report() {
        let report = sample_analyzer().analyze("   \t ");
        assert_eq!(report, Report::default());
    }

    #[test]
    fn test_unmatched_comment_yields_zero_report() {
        let report = sample_analyzer().analyze("明天出门买菜");
        assert_eq!(report.match_count, 0);
        assert_eq!(report.subjectivity, 0.0);
    }

    #[test]
    fn test_no_dictionaries_yields_zero_report() {
        let analyzer = Analyzer::new(ExpressionGroups::default(), vec![]);
        assert_eq!(analyzer.analyze("太好了"), Report::default());
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let analyzer = sample_analyzer();
        let first = analyzer.analyze("太好了");
        let second = analyzer.analyze("太好了");
        assert_eq!(first, second);
    }
}
