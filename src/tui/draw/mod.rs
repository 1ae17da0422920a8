//! TUI rendering: layout and widgets for the chat interface.

mod chat;
mod header;
mod history;
mod input;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::app::App;
use super::constants::{ACCENT, HISTORY_PANEL_MIN_TOTAL_WIDTH, HISTORY_PANEL_WIDTH};

/// Header (2) | chat log + history panel | input box (3) | bottom bar (1).
pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    header::draw_header(f, app, chunks[0], ACCENT);

    let body = chunks[1];
    if body.width >= HISTORY_PANEL_MIN_TOTAL_WIDTH {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(HISTORY_PANEL_WIDTH)])
            .split(body);
        chat::draw_chat(f, app, cols[0]);
        history::draw_history_panel(f, app, cols[1]);
    } else {
        chat::draw_chat(f, app, body);
    }

    input::draw_input_block(f, app, chunks[2]);
    input::draw_bottom_bar(f, app, chunks[3]);
}
