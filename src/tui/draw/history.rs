//! History panel: one "query: summary" line per answered question, newest first.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::core::assistant::HistoryEntry;

use super::super::app::App;
use super::super::constants::ACCENT_SECONDARY;
use super::super::text::truncate_with_ellipsis;

/// One panel row for `entry`, fitted to `width` columns.
fn entry_line(entry: &HistoryEntry, width: usize, show_timestamps: bool) -> Line<'static> {
    let mut spans = Vec::new();
    let mut used = 0;
    if show_timestamps {
        let time = format!("{} ", entry.at.format("%H:%M"));
        used += time.chars().count();
        spans.push(Span::styled(time, Style::default().fg(Color::DarkGray)));
    }
    let query = truncate_with_ellipsis(&entry.query, width.saturating_sub(used));
    used += query.chars().count();
    spans.push(Span::styled(query, Style::default().fg(ACCENT_SECONDARY)));

    let rest = width.saturating_sub(used + 2);
    if rest > 0 {
        spans.push(Span::raw(": "));
        spans.push(Span::styled(
            truncate_with_ellipsis(&entry.summary, rest),
            Style::default().fg(Color::Gray),
        ));
    }
    Line::from(spans)
}

pub(crate) fn draw_history_panel(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" History ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner_width = block.inner(area).width as usize;

    let items: Vec<ListItem> = app
        .history
        .iter()
        .map(|e| ListItem::new(entry_line(e, inner_width, app.show_timestamps)))
        .collect();
    f.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn entry_fits_width() {
        let entry = HistoryEntry::new("the capital of France", "Paris is the capital and largest city");
        let line = entry_line(&entry, 30, false);
        let s = text(&line);
        assert!(s.starts_with("the capital of France: "));
        assert_eq!(s.chars().count(), 30);
        assert!(s.ends_with('…'));
    }

    #[test]
    fn timestamp_prefix_when_enabled() {
        let entry = HistoryEntry::new("2+2", "The result is: 4");
        let s = text(&entry_line(&entry, 40, true));
        let expected = format!("{} 2+2: The result is: 4", entry.at.format("%H:%M"));
        assert_eq!(s, expected);
    }
}
