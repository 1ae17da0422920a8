//! Query normalization: prefix stripping and arithmetic-vs-lookup classification.

pub mod phrases;
mod prefix;

pub use phrases::PhrasesError;
pub use prefix::PrefixStripper;

use crate::core::math::{self, Vocabulary};

/// What to do with a stripped query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Arithmetic,
    Lookup,
}

/// Immutable tables supplied at construction: the phrase list and the math vocabulary.
#[derive(Debug, Clone)]
pub struct QueryRules {
    stripper: PrefixStripper,
    vocabulary: Vocabulary,
}

impl QueryRules {
    pub fn new<I, S>(phrases: I, vocabulary: Vocabulary) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            stripper: PrefixStripper::new(phrases)?,
            vocabulary,
        })
    }

    /// Built-in English phrases and the default vocabulary.
    pub fn builtin() -> Result<Self, regex::Error> {
        Self::new(phrases::BUILTIN_PHRASES, Vocabulary::default())
    }

    /// Rules from `phrases.json` when present and valid, else the built-in table.
    /// The second value is a user-facing notice when the file was rejected.
    pub fn load() -> Result<(Self, Option<String>), regex::Error> {
        match phrases::load_user_phrases() {
            Ok(Some(user)) => {
                log::info!("Loaded {} phrases from phrases.json", user.len());
                Ok((Self::new(user, Vocabulary::default())?, None))
            }
            Ok(None) => Ok((Self::builtin()?, None)),
            Err(e) => {
                log::warn!("{}", e);
                Ok((Self::builtin()?, Some(e.fallback_message())))
            }
        }
    }

    pub fn strip(&self, raw: &str) -> String {
        self.stripper.strip(raw)
    }

    pub fn classify(&self, query: &str) -> QueryKind {
        if math::looks_like_math(query, &self.vocabulary) {
            QueryKind::Arithmetic
        } else {
            QueryKind::Lookup
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn phrase_count(&self) -> usize {
        self.stripper.len()
    }
}
