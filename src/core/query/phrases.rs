//! Interrogative phrase table: built-in list and optional user override (phrases.json).

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::core::paths;

/// Built-in phrases, tried in order; the first match wins.
pub const BUILTIN_PHRASES: &[&str] = &[
    "What is",
    "What is the",
    "What does",
    "What happens when",
    "What are the",
    "What do you know about",
    "What causes",
    "What makes",
    "What kind of",
    "What would happen if",
    "How does",
    "How do",
    "How can",
    "How is",
    "How are the",
    "How does it affect",
    "How do you know",
    "How might",
    "How long does it take to",
    "How often does",
    "Why is",
    "Why does",
    "Why do",
    "Why can't",
    "Why should we",
    "Why did",
    "Why would someone",
    "Why does it matter if",
    "Why are there",
    "Why might",
    "When did",
    "When is",
    "When was the last time",
    "When do",
    "When should we",
    "When will",
    "When can",
    "When does it become",
    "When was",
    "When have you seen",
    "Where is",
    "Where can",
    "Where did",
    "Where does it come from",
    "Where do we find",
    "Where should we go to",
    "Where was the first",
    "Where are the most",
    "Where in the world is",
    "Where would you look for",
];

/// Error loading the user phrase table.
#[derive(Debug, thiserror::Error)]
pub enum PhrasesError {
    #[error("Failed to read phrases file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl PhrasesError {
    /// User-facing notice when falling back to the built-in table.
    pub fn fallback_message(&self) -> String {
        let detail = match self {
            PhrasesError::Io(_) => "could not read file".to_string(),
            PhrasesError::Json(_) => "invalid JSON".to_string(),
            PhrasesError::Validation(msg) => format!("validation error: {}", msg),
        };
        format!("phrases.json: {}, using built-in phrases", detail)
    }
}

/// Load the user phrase table from `~/.config/wikichat/phrases.json`.
/// Returns `Ok(None)` when the file is absent.
pub fn load_user_phrases() -> Result<Option<Vec<String>>, PhrasesError> {
    match paths::phrases_path() {
        Some(path) => load_from_path(&path),
        None => Ok(None),
    }
}

pub(crate) fn load_from_path(path: &Path) -> Result<Option<Vec<String>>, PhrasesError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let phrases: Vec<String> = serde_json::from_str(&content)?;
    validate(phrases).map(Some)
}

/// Trim phrases and reject empty tables, blank entries, and case-insensitive duplicates.
pub(crate) fn validate(phrases: Vec<String>) -> Result<Vec<String>, PhrasesError> {
    if phrases.is_empty() {
        return Err(PhrasesError::Validation(
            "phrase list cannot be empty".to_string(),
        ));
    }
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(phrases.len());
    for (i, phrase) in phrases.into_iter().enumerate() {
        let phrase = phrase.trim().to_string();
        if phrase.is_empty() {
            return Err(PhrasesError::Validation(format!(
                "phrase at index {} is blank",
                i
            )));
        }
        if !seen.insert(phrase.to_lowercase()) {
            return Err(PhrasesError::Validation(format!(
                "duplicate phrase '{}'",
                phrase
            )));
        }
        out.push(phrase);
    }
    Ok(out)
}
