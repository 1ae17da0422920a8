//! Query orchestration: strip, classify, evaluate or look up, then render the exchange.

mod history;

pub use history::{HistoryEntry, SUMMARY_MAX_CHARS};

use crate::core::app;
use crate::core::lookup::{self, SummarySource};
use crate::core::math;
use crate::core::query::{QueryKind, QueryRules};

/// Reply when evaluation fails or the summary lookup errors out.
pub const APOLOGY: &str = "Sorry, I couldn't compute that expression. 😔";

/// Reply when a lookup succeeds but yields no usable extract.
pub const NOT_FOUND: &str = "I couldn't find anything in my database. 😔 But try to refrase your input or try something else. (Remember that I am still in training!)";

/// Greeting shown when a session starts.
pub fn welcome_message() -> String {
    format!(
        "Welcome to {}! 😊 I can help you with many things and problems, but I work best with 1-4 word answers!",
        app::NAME
    )
}

/// Who wrote a chat line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Ai,
}

/// Rendering boundary: where chat lines and history entries go.
pub trait ChatView {
    fn append_message(&mut self, role: Role, text: &str);
    fn append_history(&mut self, entry: HistoryEntry);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    /// "The result is: ..."
    Arithmetic,
    /// First paragraphs of an extract.
    Summary,
    NotFound,
    MathError,
    /// The summary request itself failed (transport, status, decode).
    LookupFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub kind: ReplyKind,
    pub text: String,
}

impl Reply {
    fn new(kind: ReplyKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// One question and its answer.
#[derive(Debug, Clone)]
pub struct Exchange {
    /// Trimmed user input, as shown in the chat log.
    pub raw: String,
    /// Prefix-stripped query (history key and lookup term).
    pub query: String,
    pub reply: Reply,
}

impl Exchange {
    pub fn history_entry(&self) -> HistoryEntry {
        HistoryEntry::new(&self.query, &self.reply.text)
    }

    /// Render the reply line and its history entry. The user line is the caller's job,
    /// since it is shown before the answer is ready.
    pub fn render_reply<V: ChatView + ?Sized>(&self, view: &mut V) {
        view.append_message(Role::Ai, &self.reply.text);
        view.append_history(self.history_entry());
    }
}

/// Answers questions with a fixed rule set and a summary source.
pub struct Assistant<S> {
    rules: QueryRules,
    source: S,
}

impl<S: SummarySource> Assistant<S> {
    pub fn new(rules: QueryRules, source: S) -> Self {
        Self { rules, source }
    }

    pub fn rules(&self) -> &QueryRules {
        &self.rules
    }

    /// Produce the reply for `raw`. Never fails: errors become fixed reply strings.
    pub async fn answer(&self, raw: &str) -> Exchange {
        let raw = raw.trim().to_string();
        let query = self.rules.strip(&raw);

        let reply = match self.rules.classify(&query) {
            QueryKind::Arithmetic => self.compute(&query),
            QueryKind::Lookup => self.look_up(&query).await,
        };

        Exchange { raw, query, reply }
    }

    /// Render the user line, answer, then render the reply and history entry.
    /// Blank input is ignored and returns `None`.
    pub async fn submit<V: ChatView + ?Sized>(&self, raw: &str, view: &mut V) -> Option<Exchange> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        view.append_message(Role::User, trimmed);
        let exchange = self.answer(trimmed).await;
        exchange.render_reply(view);
        Some(exchange)
    }

    fn compute(&self, query: &str) -> Reply {
        match math::evaluate(query, self.rules.vocabulary()) {
            Ok(value) => Reply::new(
                ReplyKind::Arithmetic,
                format!("The result is: {}", math::format_number(value)),
            ),
            Err(e) => {
                log::debug!("Could not evaluate {:?}: {}", query, e);
                Reply::new(ReplyKind::MathError, APOLOGY)
            }
        }
    }

    async fn look_up(&self, query: &str) -> Reply {
        if query.is_empty() {
            return Reply::new(ReplyKind::NotFound, NOT_FOUND);
        }
        match self.source.fetch_extract(query).await {
            Ok(Some(extract)) => Reply::new(
                ReplyKind::Summary,
                lookup::first_paragraphs(&extract, lookup::EXTRACT_PARAGRAPHS),
            ),
            Ok(None) => Reply::new(ReplyKind::NotFound, NOT_FOUND),
            Err(e) => {
                log::warn!("Summary lookup for {:?} failed: {}", query, e);
                Reply::new(ReplyKind::LookupFailed, APOLOGY)
            }
        }
    }
}

#[cfg(test)]
mod tests;
