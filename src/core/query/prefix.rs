//! Prefix stripping: drop the first matching interrogative phrase from a question.

use regex::{Regex, RegexBuilder};

/// Ordered, case-insensitive phrase matcher anchored at the start of the input.
#[derive(Debug, Clone)]
pub struct PrefixStripper {
    patterns: Vec<Regex>,
}

impl PrefixStripper {
    /// Compile one anchored pattern per phrase, keeping the table order.
    pub fn new<I, S>(phrases: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = phrases
            .into_iter()
            .map(|p| {
                RegexBuilder::new(&format!("^{}", regex::escape(p.as_ref())))
                    .case_insensitive(true)
                    .build()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Trim `raw`, then remove the first phrase that matches its start and trim again.
    /// Only one phrase is ever removed.
    pub fn strip(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        for pattern in &self.patterns {
            if let Some(m) = pattern.find(trimmed) {
                return trimmed[m.end()..].trim().to_string();
            }
        }
        trimmed.to_string()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
