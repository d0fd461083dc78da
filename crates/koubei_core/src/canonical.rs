//! Expression canonicalization: collapse recognized surface variants to a
//! canonical phrase, or strip filler particles when no group matches.

use indexmap::IndexMap;
use serde::Deserialize;

/// Sentence-final interjection particles (啊呀呢吧嘛哦哟).
const SENTENCE_FINAL_PARTICLES: &[char] = &['啊', '呀', '呢', '吧', '嘛', '哦', '哟'];

/// Personal pronoun characters, singular and plural, plus 的.
const PRONOUNS: &[char] = &['我', '你', '他', '她', '它', '们', '的'];

/// Modal and tense-marker particles (了吧吗啦哈).
const MODAL_MARKERS: &[char] = &['了', '吧', '吗', '啦', '哈'];

/// Canonical phrase → ordered list of surface variants.
///
/// Insertion order of the source file is preserved and is semantically
/// significant: the first group whose variant appears in a comment wins.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ExpressionGroups {
    groups: IndexMap<String, Vec<String>>,
}

impl ExpressionGroups {
    pub fn new(groups: IndexMap<String, Vec<String>>) -> Self {
        Self { groups }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in stored order, each with its variants in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.groups.iter()
    }
}

/// Rewrite a comment to its canonical expression.
///
/// The comment is lowercased, then groups are scanned in stored order; the
/// first variant found as a substring short-circuits the whole function and
/// the canonical phrase replaces the entire comment, whatever else it said.
/// When no variant matches, three filler character classes are deleted in
/// sequence (sentence-final particles, pronouns, modal markers) and the
/// result is trimmed. Exactly one of the two paths applies per call.
pub fn canonicalize(comment: &str, groups: &ExpressionGroups) -> String {
    let comment = comment.to_lowercase();
    for (canonical, variants) in groups.iter() {
        for variant in variants {
            if comment.contains(variant.as_str()) {
                return canonical.clone();
            }
        }
    }
    strip_fillers(&comment)
}

fn strip_fillers(comment: &str) -> String {
    let pass1 = strip_class(comment, SENTENCE_FINAL_PARTICLES);
    let pass2 = strip_class(&pass1, PRONOUNS);
    let pass3 = strip_class(&pass2, MODAL_MARKERS);
    pass3.trim().to_string()
}

fn strip_class(text: &str, class: &[char]) -> String {
    text.chars().filter(|c| !class.contains(c)).collect()
}
