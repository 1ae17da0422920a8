//! TUI application state: chat log, history panel, input, scroll.

mod messages;

use std::time::Instant;

use crate::core::assistant::HistoryEntry;

/// Lines displayed in the chat log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatMessage {
    User(String),
    Ai(String),
    /// Placeholder while an answer is pending.
    Thinking,
    /// Local notice (e.g. phrases.json fallback), not part of any exchange.
    Notice(String),
}

/// Scroll position: either a specific line index, or "at bottom" (follow new content).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollPosition {
    Line(usize),
    #[default]
    Bottom,
}

pub struct App {
    pub(crate) messages: Vec<ChatMessage>,
    /// History panel entries, newest first.
    pub(crate) history: Vec<HistoryEntry>,
    /// User input in the text field.
    pub(crate) input: String,
    pub(crate) scroll: ScrollPosition,
    pub(crate) last_max_scroll: usize,
    /// Show local times next to history entries (WIKICHAT_SHOW_TIMESTAMPS).
    pub(crate) show_timestamps: bool,
    /// When the in-flight answer started; drives the header spinner.
    pub(crate) pending_since: Option<Instant>,
}

impl App {
    pub fn new(show_timestamps: bool) -> Self {
        Self {
            messages: vec![],
            history: vec![],
            input: String::new(),
            scroll: ScrollPosition::default(),
            last_max_scroll: 0,
            show_timestamps,
            pending_since: None,
        }
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Must be called before scroll_up/scroll_down when at bottom.
    pub(crate) fn materialize_scroll(&mut self) {
        if self.scroll == ScrollPosition::Bottom {
            self.scroll = ScrollPosition::Line(self.last_max_scroll);
        }
    }

    pub(crate) fn scroll_down(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            let next = (pos + n).min(self.last_max_scroll);
            self.scroll = if next >= self.last_max_scroll {
                ScrollPosition::Bottom
            } else {
                ScrollPosition::Line(next)
            };
        }
    }

    pub(crate) fn scroll_up(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line(pos.saturating_sub(n));
        }
    }

    /// Resolve scroll position to a concrete line index.
    pub(crate) fn scroll_line(&self) -> usize {
        match self.scroll {
            ScrollPosition::Line(n) => n.min(self.last_max_scroll),
            ScrollPosition::Bottom => self.last_max_scroll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_up_then_back_to_bottom() {
        let mut app = App::new(false);
        app.last_max_scroll = 20;
        app.scroll_up(5);
        assert_eq!(app.scroll, ScrollPosition::Line(15));
        assert_eq!(app.scroll_line(), 15);
        app.scroll_down(3);
        assert_eq!(app.scroll, ScrollPosition::Line(18));
        app.scroll_down(10);
        assert_eq!(app.scroll, ScrollPosition::Bottom);
        assert_eq!(app.scroll_line(), 20);
    }

    #[test]
    fn scroll_up_saturates_at_top() {
        let mut app = App::new(false);
        app.last_max_scroll = 2;
        app.scroll_up(10);
        assert_eq!(app.scroll_line(), 0);
    }
}
