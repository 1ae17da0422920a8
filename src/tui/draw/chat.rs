//! Chat log: labelled message blocks, notices, and scrollbar.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::core::app;

use super::super::app::{App, ChatMessage};
use super::super::constants::{ACCENT, ACCENT_SECONDARY, USER_LABEL};
use super::super::text::wrap_message;

/// Repeat a character to fill width (approximate; chars may have different display widths).
fn repeat_char(c: char, n: usize) -> String {
    std::iter::repeat_n(c, n).collect()
}

/// Add a labelled message block: "┌─ Label ──┐", wrapped body, bottom border.
fn add_message_block(
    lines: &mut Vec<Line<'static>>,
    label: &str,
    content: &str,
    border_color: Color,
    wrap_width: usize,
) {
    let border_style = Style::default().fg(border_color);
    let content_width = wrap_width.saturating_sub(4).max(1);

    let top_label = format!("┌─ {} ", label);
    let top_trail_len = wrap_width.saturating_sub(top_label.chars().count() + 1);
    lines.push(Line::from(Span::styled(
        format!("{}{}┐", top_label, repeat_char('─', top_trail_len)),
        border_style,
    )));

    for chunk in wrap_message(content.trim(), content_width) {
        lines.push(Line::from(vec![
            Span::styled("│ ", border_style),
            Span::raw(chunk),
        ]));
    }

    lines.push(Line::from(Span::styled(
        format!("└{}┘", repeat_char('─', wrap_width.saturating_sub(2))),
        border_style,
    )));
}

/// Build every display line of the chat log for the given width.
pub(crate) fn chat_lines(messages: &[ChatMessage], wrap_width: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    for msg in messages {
        match msg {
            ChatMessage::User(s) => {
                add_message_block(&mut lines, USER_LABEL, s, Color::DarkGray, wrap_width);
            }
            ChatMessage::Ai(s) => {
                add_message_block(&mut lines, app::NAME, s, ACCENT_SECONDARY, wrap_width);
            }
            ChatMessage::Thinking => {
                lines.push(Line::from(Span::styled(
                    "  Looking it up... ",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )));
            }
            ChatMessage::Notice(s) => {
                for chunk in wrap_message(s, wrap_width.saturating_sub(2).max(1)) {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", chunk),
                        Style::default().fg(ACCENT).add_modifier(Modifier::ITALIC),
                    )));
                }
            }
        }
    }
    lines
}

pub(crate) fn draw_chat(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let text_area = chunks[0];
    let scrollbar_area = chunks[1];

    let lines = chat_lines(&app.messages, text_area.width as usize);

    let total_lines = lines.len();
    let visible = text_area.height as usize;
    let max_scroll = total_lines.saturating_sub(visible.max(1));
    app.last_max_scroll = max_scroll;
    let start = app.scroll_line().min(max_scroll);
    let visible_lines: Vec<Line> = lines.into_iter().skip(start).take(visible).collect();

    f.render_widget(Paragraph::new(visible_lines), text_area);

    let mut scrollbar_state = ScrollbarState::default()
        .position(start)
        .content_length(total_lines);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_symbol("█")
        .thumb_style(Style::default().fg(ACCENT_SECONDARY))
        .track_symbol(Some("│"));
    f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn user_block_is_labelled() {
        let lines = chat_lines(&[ChatMessage::User("Rust".to_string())], 20);
        let text = plain(&lines);
        assert_eq!(text.len(), 3);
        assert!(text[0].starts_with("┌─ You "));
        assert!(text[0].ends_with('┐'));
        assert_eq!(text[1], "│ Rust");
        assert!(text[2].starts_with('└'));
    }

    #[test]
    fn reply_paragraphs_stay_separate() {
        let lines = chat_lines(&[ChatMessage::Ai("One.\n\nTwo.".to_string())], 30);
        let text = plain(&lines);
        assert_eq!(&text[1..4], &["│ One.", "│ ", "│ Two."]);
    }

    #[test]
    fn thinking_is_single_line() {
        let lines = chat_lines(&[ChatMessage::Thinking], 30);
        assert_eq!(lines.len(), 1);
    }
}
