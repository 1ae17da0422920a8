//! Header: logo with spinner, title, answered-question count.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::app;

use super::super::app::App;
use super::super::constants::{LOGO_IDLE, LOGO_THINKING};

/// Width for the right-hand question counter (e.g. "12 asked").
const COUNT_HEADER_WIDTH: u16 = 14;

/// Spinner frame for the in-flight answer, or the idle logo.
fn logo_symbol(app: &App) -> &'static str {
    match app.pending_since {
        Some(start) => {
            let phase = start.elapsed().as_millis() as usize;
            LOGO_THINKING[(phase / 80) % LOGO_THINKING.len()]
        }
        None => LOGO_IDLE,
    }
}

pub(crate) fn draw_header(f: &mut Frame, app: &App, area: Rect, accent: Color) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(COUNT_HEADER_WIDTH),
        ])
        .split(area);

    let logo_line = Line::from(Span::styled(
        format!("{} ", logo_symbol(app)),
        Style::default().fg(accent),
    ));
    f.render_widget(Paragraph::new(logo_line), header_chunks[0]);

    let title = Line::from(Span::styled(
        format!("{} ", app::NAME),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(
        Paragraph::new(title).alignment(Alignment::Center),
        header_chunks[1],
    );

    let count_line = Line::from(Span::styled(
        format!("{} asked", app.history.len()),
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(
        Paragraph::new(count_line).alignment(Alignment::Right),
        header_chunks[2],
    );
}
