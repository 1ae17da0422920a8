//! Orchestration tests with a scripted summary source.

use std::sync::Mutex;

use crate::core::lookup::{LookupError, SummarySource};
use crate::core::query::QueryRules;

use super::*;

enum Scripted {
    Extract(&'static str),
    Nothing,
    Fail,
}

struct FakeSource {
    script: Scripted,
    calls: Mutex<Vec<String>>,
}

impl FakeSource {
    fn new(script: Scripted) -> Self {
        Self {
            script,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl SummarySource for FakeSource {
    async fn fetch_extract(&self, term: &str) -> Result<Option<String>, LookupError> {
        self.calls.lock().unwrap().push(term.to_string());
        match self.script {
            Scripted::Extract(s) => Ok(Some(s.to_string())),
            Scripted::Nothing => Ok(None),
            Scripted::Fail => Err(LookupError::Status(503)),
        }
    }
}

#[derive(Default)]
struct RecordingView {
    lines: Vec<(Role, String)>,
    history: Vec<HistoryEntry>,
}

impl ChatView for RecordingView {
    fn append_message(&mut self, role: Role, text: &str) {
        self.lines.push((role, text.to_string()));
    }

    fn append_history(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }
}

fn assistant(script: Scripted) -> Assistant<FakeSource> {
    Assistant::new(QueryRules::builtin().unwrap(), FakeSource::new(script))
}

#[tokio::test]
async fn arithmetic_question_is_computed() {
    let a = assistant(Scripted::Nothing);
    let ex = a.answer("What is 2+2").await;
    assert_eq!(ex.query, "2+2");
    assert_eq!(ex.reply.kind, ReplyKind::Arithmetic);
    assert_eq!(ex.reply.text, "The result is: 4");
    assert!(a.source.calls().is_empty());
}

#[tokio::test]
async fn percent_and_power_formatting() {
    let a = assistant(Scripted::Nothing);
    assert_eq!(a.answer("10%").await.reply.text, "The result is: 0.1");
    assert_eq!(a.answer("How is 2^3").await.reply.text, "The result is: 8");
    assert_eq!(a.answer("sin(0)").await.reply.text, "The result is: 0");
}

#[tokio::test]
async fn malformed_math_gets_apology() {
    let a = assistant(Scripted::Extract("should not be used"));
    for q in ["sin(", "tennis", "1/0"] {
        let ex = a.answer(q).await;
        assert_eq!(ex.reply.kind, ReplyKind::MathError, "{}", q);
        assert_eq!(ex.reply.text, APOLOGY);
    }
    assert!(a.source.calls().is_empty());
}

#[tokio::test]
async fn lookup_returns_extract_unmodified() {
    let a = assistant(Scripted::Extract("Paris is the capital..."));
    let ex = a.answer("What is the capital of France").await;
    assert_eq!(ex.reply.kind, ReplyKind::Summary);
    assert_eq!(ex.reply.text, "Paris is the capital...");
    assert_eq!(a.source.calls(), vec!["the capital of France"]);
}

#[tokio::test]
async fn lookup_keeps_two_paragraphs() {
    let a = assistant(Scripted::Extract("One.\nTwo.\nThree."));
    assert_eq!(a.answer("Rust").await.reply.text, "One.\n\nTwo.");
}

#[tokio::test]
async fn missing_extract_is_not_found() {
    let a = assistant(Scripted::Nothing);
    let ex = a.answer("Where is Atlantis").await;
    assert_eq!(ex.reply.kind, ReplyKind::NotFound);
    assert_eq!(ex.reply.text, NOT_FOUND);
}

#[tokio::test]
async fn lookup_failure_gets_apology() {
    let a = assistant(Scripted::Fail);
    let ex = a.answer("Atlantis").await;
    assert_eq!(ex.reply.kind, ReplyKind::LookupFailed);
    assert_eq!(ex.reply.text, APOLOGY);
    assert_eq!(a.source.calls(), vec!["Atlantis"]);
}

#[tokio::test]
async fn lookup_failure_history_keeps_apology() {
    let a = assistant(Scripted::Fail);
    let mut view = RecordingView::default();
    a.submit("Where is Atlantis", &mut view).await.unwrap();
    assert_eq!(view.lines[1], (Role::Ai, APOLOGY.to_string()));
    assert_eq!(view.history[0].query, "Atlantis");
    assert_eq!(view.history[0].summary, APOLOGY);
}

#[tokio::test]
async fn empty_query_skips_network() {
    let a = assistant(Scripted::Extract("unused"));
    let ex = a.answer("What is").await;
    assert_eq!(ex.query, "");
    assert_eq!(ex.reply.kind, ReplyKind::NotFound);
    assert!(a.source.calls().is_empty());
}

#[tokio::test]
async fn submit_renders_user_reply_and_history() {
    let a = assistant(Scripted::Nothing);
    let mut view = RecordingView::default();
    let ex = a.submit("  What is 2+2  ", &mut view).await.unwrap();
    assert_eq!(ex.raw, "What is 2+2");
    assert_eq!(
        view.lines,
        vec![
            (Role::User, "What is 2+2".to_string()),
            (Role::Ai, "The result is: 4".to_string()),
        ]
    );
    assert_eq!(view.history.len(), 1);
    assert_eq!(view.history[0].query, "2+2");
    assert_eq!(view.history[0].summary, "The result is: 4");
}

#[tokio::test]
async fn submit_truncates_long_history_summary() {
    let a = assistant(Scripted::Nothing);
    let mut view = RecordingView::default();
    a.submit("Atlantis", &mut view).await.unwrap();
    let summary = &view.history[0].summary;
    assert!(NOT_FOUND.chars().count() > SUMMARY_MAX_CHARS);
    assert_eq!(summary.chars().count(), SUMMARY_MAX_CHARS + 3);
    assert!(summary.ends_with("..."));
    assert!(NOT_FOUND.starts_with(summary.trim_end_matches("...")));
}

#[tokio::test]
async fn submit_ignores_blank_input() {
    let a = assistant(Scripted::Nothing);
    let mut view = RecordingView::default();
    assert!(a.submit("   ", &mut view).await.is_none());
    assert!(view.lines.is_empty());
    assert!(view.history.is_empty());
}

#[test]
fn fixed_reply_texts() {
    assert!(welcome_message().ends_with("but I work best with 1-4 word answers!"));
    assert!(NOT_FOUND.starts_with("I couldn't find anything in my database. 😔"));
    assert_ne!(APOLOGY, NOT_FOUND);
}
