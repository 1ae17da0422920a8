//! History panel entries: the stripped query plus a short summary of the reply.

use chrono::{DateTime, Local};

/// Max characters of the reply kept in a history entry (before the ellipsis).
pub const SUMMARY_MAX_CHARS: usize = 50;

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub query: String,
    pub summary: String,
    pub at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(query: &str, reply: &str) -> Self {
        Self {
            query: query.to_string(),
            summary: summarize(reply, SUMMARY_MAX_CHARS),
            at: Local::now(),
        }
    }

    /// "query: summary" as shown in the history panel.
    pub fn label(&self) -> String {
        format!("{}: {}", self.query, self.summary)
    }
}

/// First `max_chars` characters followed by "..." when `text` is longer; else `text` unchanged.
pub fn summarize(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_reply_stored_verbatim() {
        assert_eq!(summarize("The result is: 4", 50), "The result is: 4");
    }

    #[test]
    fn exactly_fifty_chars_stored_verbatim() {
        let s = "x".repeat(50);
        assert_eq!(summarize(&s, 50), s);
    }

    #[test]
    fn long_reply_truncated_with_ellipsis() {
        let s = "y".repeat(51);
        let out = summarize(&s, 50);
        assert_eq!(out, format!("{}...", "y".repeat(50)));
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let s = "é".repeat(60);
        let out = summarize(&s, 50);
        assert_eq!(out.chars().count(), 53);
        assert!(out.starts_with(&"é".repeat(50)));
    }

    #[test]
    fn entry_label() {
        let entry = HistoryEntry::new("2+2", "The result is: 4");
        assert_eq!(entry.label(), "2+2: The result is: 4");
    }
}
