//! Wordbank loading: expression groups and sentiment dictionaries.
//!
//! Loading happens once at startup; a malformed or missing file is fatal
//! rather than partially recovered. Entry shape is validated here by typed
//! deserialization — the pipeline itself never checks it.

use anyhow::{Context, Result};
use std::path::Path;

use crate::canonical::ExpressionGroups;
use crate::matcher::SentimentDictionary;

/// Load the expression group table from a single JSON object file.
///
/// Key order in the file is preserved; it decides which group wins when a
/// comment contains variants of more than one.
pub fn load_groups<P: AsRef<Path>>(path: P) -> Result<ExpressionGroups> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read expression groups: {}", path.display()))?;
    let groups: ExpressionGroups = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse expression groups: {}", path.display()))?;
    tracing::info!(
        "Loaded {} expression groups from {}",
        groups.len(),
        path.display()
    );
    Ok(groups)
}

/// Load every `*.json` file in a folder as an independent dictionary.
///
/// Files are read in name order so the dictionary sequence is reproducible
/// across platforms. Non-JSON files are skipped; a JSON file that fails to
/// parse aborts the whole load.
pub fn load_dictionaries<P: AsRef<Path>>(dir: P) -> Result<Vec<SentimentDictionary>> {
    let dir = dir.as_ref();
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read dictionary folder: {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list dictionary folder: {}", dir.display()))?
            .path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut dictionaries = Vec::with_capacity(paths.len());
    for path in &paths {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dictionary: {}", path.display()))?;
        let dict: SentimentDictionary = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse dictionary: {}", path.display()))?;
        tracing::debug!("Loaded {} phrases from {}", dict.len(), path.display());
        dictionaries.push(dict);
    }

    tracing::info!(
        "Loaded {} sentiment dictionaries from {}",
        dictionaries.len(),
        dir.display()
    );
    Ok(dictionaries)
}
