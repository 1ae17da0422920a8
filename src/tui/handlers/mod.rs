//! Event handlers for the TUI: keyboard and mouse.

mod answer_spawn;
mod input;

pub use answer_spawn::AnswerOutcome;

use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use std::sync::Arc;
use std::sync::mpsc;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::core::assistant::Assistant;
use crate::core::lookup::SummarySource;

use super::app::App;
use super::constants;

/// Holds the receiver for an answer in progress.
pub struct PendingAnswer {
    pub result_rx: mpsc::Receiver<AnswerOutcome>,
    /// Token to cancel the in-flight request.
    pub cancel_token: CancellationToken,
}

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Handle a mouse event (wheel scrolls the chat log).
pub fn handle_mouse(mouse: MouseEvent, app: &mut App) -> HandleResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_up(constants::SCROLL_LINES_SMALL),
        MouseEventKind::ScrollDown => app.scroll_down(constants::SCROLL_LINES_SMALL),
        _ => {}
    }
    HandleResult::Continue
}

/// Context for key event handling. Bundles mutable state to reduce parameter count.
pub struct HandleKeyContext<'a, S> {
    pub app: &'a mut App,
    pub assistant: &'a Arc<Assistant<S>>,
    pub pending: &'a mut Option<PendingAnswer>,
    pub rt: &'a Arc<Runtime>,
}

/// Handle a key event. Returns HandleResult::Break to exit the main loop.
pub fn handle_key<S>(key: KeyEvent, ctx: HandleKeyContext<'_, S>) -> HandleResult
where
    S: SummarySource + Send + Sync + 'static,
{
    let HandleKeyContext {
        app,
        assistant,
        pending,
        rt,
    } = ctx;

    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    input::handle_main_input(key.code, key.modifiers, app, assistant, pending, rt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    use crate::core::assistant::ChatView;
    use crate::core::lookup::LookupError;
    use crate::core::query::QueryRules;

    use super::super::app::ChatMessage;

    struct NoSource;

    impl SummarySource for NoSource {
        async fn fetch_extract(&self, _term: &str) -> Result<Option<String>, LookupError> {
            Ok(None)
        }
    }

    struct Harness {
        app: App,
        assistant: Arc<Assistant<NoSource>>,
        pending: Option<PendingAnswer>,
        rt: Arc<Runtime>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                app: App::new(false),
                assistant: Arc::new(Assistant::new(QueryRules::builtin().unwrap(), NoSource)),
                pending: None,
                rt: Arc::new(Runtime::new().unwrap()),
            }
        }

        fn press(&mut self, code: KeyCode, mods: KeyModifiers) -> HandleResult {
            handle_key(
                KeyEvent::new(code, mods),
                HandleKeyContext {
                    app: &mut self.app,
                    assistant: &self.assistant,
                    pending: &mut self.pending,
                    rt: &self.rt,
                },
            )
        }

        fn type_str(&mut self, s: &str) {
            for c in s.chars() {
                self.press(KeyCode::Char(c), KeyModifiers::NONE);
            }
        }

        fn wait(&mut self) -> AnswerOutcome {
            let pending = self.pending.take().expect("pending answer");
            pending.result_rx.recv().expect("answer outcome")
        }
    }

    #[test]
    fn enter_submits_and_answers() {
        let mut h = Harness::new();
        h.type_str("What is 2+2");
        h.press(KeyCode::Enter, KeyModifiers::NONE);
        assert!(h.app.input.is_empty());
        assert!(h.app.is_pending());
        assert_eq!(
            h.app.messages,
            vec![
                ChatMessage::User("What is 2+2".to_string()),
                ChatMessage::Thinking
            ]
        );
        match h.wait() {
            AnswerOutcome::Answered(ex) => {
                h.app.set_thinking(false);
                ex.render_reply(&mut h.app);
            }
            AnswerOutcome::Cancelled => panic!("unexpected cancel"),
        }
        assert_eq!(
            h.app.messages.last(),
            Some(&ChatMessage::Ai("The result is: 4".to_string()))
        );
        assert_eq!(h.app.history[0].query, "2+2");
    }

    #[test]
    fn enter_while_pending_keeps_input() {
        let mut h = Harness::new();
        h.type_str("Rust");
        h.press(KeyCode::Enter, KeyModifiers::NONE);
        h.type_str("Go");
        h.press(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(h.app.input, "Go");
        let users = h
            .app
            .messages
            .iter()
            .filter(|m| matches!(m, ChatMessage::User(_)))
            .count();
        assert_eq!(users, 1);
        let _ = h.wait();
    }

    #[test]
    fn blank_input_not_submitted() {
        let mut h = Harness::new();
        h.type_str("   ");
        h.press(KeyCode::Enter, KeyModifiers::NONE);
        assert!(h.pending.is_none());
        assert!(h.app.messages.is_empty());
    }

    #[test]
    fn esc_clears_input_when_idle() {
        let mut h = Harness::new();
        h.type_str("abc");
        h.press(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(h.app.input, "ab");
        h.press(KeyCode::Esc, KeyModifiers::NONE);
        assert!(h.app.input.is_empty());
    }

    #[test]
    fn ctrl_c_quits() {
        let mut h = Harness::new();
        assert_eq!(
            h.press(KeyCode::Char('c'), KeyModifiers::CONTROL),
            HandleResult::Break
        );
        assert!(h.app.input.is_empty());
    }

    #[test]
    fn user_line_rendered_through_chat_view() {
        let mut app = App::new(false);
        app.append_message(crate::core::assistant::Role::User, "hi");
        assert_eq!(app.messages, vec![ChatMessage::User("hi".to_string())]);
    }
}
