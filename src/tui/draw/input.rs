//! Input box and bottom bar.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::super::app::App;
use super::super::constants::ACCENT;

/// Draw the input block and set cursor position. Shows the tail when the input overflows.
pub(crate) fn draw_input_block(f: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.is_pending() {
        Color::DarkGray
    } else {
        ACCENT
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    let width = inner.width as usize;

    let char_count = app.input.chars().count();
    let visible: String = app
        .input
        .chars()
        .skip(char_count.saturating_sub(width.saturating_sub(1)))
        .collect();
    let content = if app.input.is_empty() {
        Span::styled(
            "Ask a question (e.g. \"What is Rust\" or \"2+2\")",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(visible.clone())
    };
    f.render_widget(
        Paragraph::new(Line::from(content))
            .block(block)
            .style(Style::default().fg(Color::White)),
        area,
    );
    let cx = inner.x + visible.chars().count().min(width) as u16;
    f.set_cursor_position(Position::new(cx, inner.y));
}

/// Bottom bar: keyboard shortcuts, contextual while an answer is pending.
pub(crate) fn draw_bottom_bar(f: &mut Frame, app: &App, area: Rect) {
    let key = Style::default().fg(ACCENT);
    let desc = Style::default().fg(Color::DarkGray);
    let mut spans = Vec::new();
    if app.is_pending() {
        spans.push(Span::styled("Esc", key));
        spans.push(Span::styled(" cancel  ", desc));
    } else {
        spans.push(Span::styled("Enter", key));
        spans.push(Span::styled(" ask  ", desc));
        spans.push(Span::styled("Esc", key));
        spans.push(Span::styled(" clear  ", desc));
    }
    spans.push(Span::styled("↑↓ PgUp PgDn", key));
    spans.push(Span::styled(" scroll  ", desc));
    spans.push(Span::styled("Ctrl+C", key));
    spans.push(Span::styled(" quit ", desc));
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
        area,
    );
}
