//! TUI constants: colors, timing, layout, and labels.

use ratatui::style::Color;

/// Accent green color (#98FB98).
pub(super) const ACCENT: Color = Color::Rgb(152, 251, 152);

/// Secondary accent (soft cyan, #7EC8E3) for history queries.
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(126, 200, 227);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Scroll amount for arrow keys and mouse wheel.
pub(crate) const SCROLL_LINES_SMALL: usize = 3;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: usize = 10;

/// Width of the history panel on the right (including borders).
pub(crate) const HISTORY_PANEL_WIDTH: u16 = 38;

/// Below this total width the history panel is hidden.
pub(crate) const HISTORY_PANEL_MIN_TOTAL_WIDTH: u16 = 80;

/// Label for user lines in the chat log.
pub(super) const USER_LABEL: &str = "You";

/// Shown in place of a reply when the user cancels an in-flight lookup.
pub(crate) const CANCELLED_NOTICE: &str = "*[Request cancelled]*";

/// Minimalist logo when idle (single character).
pub(super) const LOGO_IDLE: &str = "◆";

/// Spinner frames for the "looking up" animation (braille pattern, 4 frames).
pub(super) const LOGO_THINKING: &[&str] = &["⠋", "⠙", "⠹", "⠸"];
