//! # Koubei Core
//!
//! Scores a short free-text Chinese comment against one or more curated
//! sentiment dictionaries. The pipeline, in order:
//!
//! 1. **Charset normalization** — lowercase, drop everything outside
//!    CJK ideographs / ASCII letters / digits
//! 2. **Expression canonicalization** — collapse recognized surface
//!    variants to one canonical phrase, or strip filler particles
//! 3. **Phrase matching** — substring containment plus whole-string
//!    fuzzy similarity against each dictionary
//! 4. **Aggregation** — average scores and union labels across all
//!    matched entries into one report
//!
//! Dictionaries and expression groups are loaded once at startup (see
//! [`wordbank`]) and held read-only by an [`Analyzer`] for the process
//! lifetime. Every stage is a pure function of its inputs.

pub mod analyzer;
pub mod canonical;
pub mod matcher;
pub mod normalize;
pub mod report;
pub mod wordbank;

pub use analyzer::Analyzer;
pub use canonical::{canonicalize, ExpressionGroups};
pub use matcher::{match_phrases, SentimentDictionary, SentimentEntry};
pub use normalize::normalize_charset;
pub use report::{aggregate, Report};
