//! Chat log and history panel updates. `App` is the TUI's `ChatView`.

use std::time::Instant;

use crate::core::assistant::{ChatView, HistoryEntry, Role};

use super::{App, ChatMessage, ScrollPosition};

impl ChatView for App {
    fn append_message(&mut self, role: Role, text: &str) {
        let msg = match role {
            Role::User => ChatMessage::User(text.to_string()),
            Role::Ai => ChatMessage::Ai(text.to_string()),
        };
        self.messages.push(msg);
        self.scroll = ScrollPosition::Bottom;
    }

    /// Newest entries go on top of the panel.
    fn append_history(&mut self, entry: HistoryEntry) {
        self.history.insert(0, entry);
    }
}

impl App {
    pub(crate) fn push_notice(&mut self, text: &str) {
        self.messages.push(ChatMessage::Notice(text.to_string()));
    }

    pub(crate) fn set_thinking(&mut self, thinking: bool) {
        if thinking {
            self.messages.push(ChatMessage::Thinking);
            self.pending_since = Some(Instant::now());
            self.scroll = ScrollPosition::Bottom;
        } else {
            self.messages.retain(|m| !matches!(m, ChatMessage::Thinking));
            self.pending_since = None;
        }
    }
}
