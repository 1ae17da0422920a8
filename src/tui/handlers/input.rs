//! Handler for main input (question field and chat scroll).

use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::core::assistant::{Assistant, ChatView, Role};
use crate::core::lookup::SummarySource;

use super::super::app::App;
use super::super::constants;
use super::PendingAnswer;
use super::answer_spawn;

/// Handle main input keys.
pub(crate) fn handle_main_input<S>(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    app: &mut App,
    assistant: &Arc<Assistant<S>>,
    pending: &mut Option<PendingAnswer>,
    rt: &Arc<Runtime>,
) -> super::HandleResult
where
    S: SummarySource + Send + Sync + 'static,
{
    match (key_code, key_modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => super::HandleResult::Break,
        (KeyCode::Enter, _) => {
            // One question at a time: Enter is ignored (input kept) while an answer is pending.
            let input = app.input.trim().to_string();
            if !input.is_empty() && pending.is_none() {
                app.input.clear();
                app.append_message(Role::User, &input);
                app.set_thinking(true);
                *pending = Some(answer_spawn::spawn_answer(rt, Arc::clone(assistant), input));
            }
            super::HandleResult::Continue
        }
        (KeyCode::Esc, _) => {
            if let Some(p) = pending.as_ref() {
                p.cancel_token.cancel();
            } else {
                app.input.clear();
            }
            super::HandleResult::Continue
        }
        (KeyCode::Backspace, _) => {
            app.input.pop();
            super::HandleResult::Continue
        }
        (KeyCode::Up, _) => {
            app.scroll_up(constants::SCROLL_LINES_SMALL);
            super::HandleResult::Continue
        }
        (KeyCode::Down, _) => {
            app.scroll_down(constants::SCROLL_LINES_SMALL);
            super::HandleResult::Continue
        }
        (KeyCode::PageUp, _) => {
            app.scroll_up(constants::SCROLL_LINES_PAGE);
            super::HandleResult::Continue
        }
        (KeyCode::PageDown, _) => {
            app.scroll_down(constants::SCROLL_LINES_PAGE);
            super::HandleResult::Continue
        }
        (KeyCode::Char(c), mods) => {
            // Ignore Ctrl/Alt+key: likely an unbound shortcut
            if mods.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                return super::HandleResult::Continue;
            }
            app.input.push(c);
            super::HandleResult::Continue
        }
        _ => super::HandleResult::Continue,
    }
}
