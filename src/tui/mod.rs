//! TUI (Text User Interface): chat log, history panel, and input line.

mod answer_result;
mod app;
mod constants;
mod draw;
mod handlers;
mod text;

use app::App;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Runtime;

use crate::core::assistant::{Assistant, ChatView, Role, welcome_message};
use crate::core::config::Config;
use crate::core::lookup::SummaryClient;

use draw::draw;
use handlers::{HandleResult, PendingAnswer};

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), crossterm::event::DisableMouseCapture);
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for lookups.
/// `notice` is shown once below the welcome line (phrases.json fallback).
pub fn run(
    config: Arc<Config>,
    assistant: Arc<Assistant<SummaryClient>>,
    notice: Option<String>,
) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    execute!(stdout, crossterm::event::EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );

    let mut app = App::new(config.show_timestamps);
    app.append_message(Role::Ai, &welcome_message());
    if let Some(notice) = notice {
        app.push_notice(&notice);
    }
    let mut pending: Option<PendingAnswer> = None;
    log::info!("TUI started ({} prefix phrases)", assistant.rules().phrase_count());

    loop {
        if let Some(ref answer) = pending
            && let Ok(outcome) = answer.result_rx.try_recv()
        {
            answer_result::handle_answer_outcome(&mut app, outcome);
            pending = None;
        }

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))? {
            match event::read()? {
                Event::Mouse(mouse) => {
                    let _ = handlers::handle_mouse(mouse, &mut app);
                }
                Event::Key(key) => {
                    let result = handlers::handle_key(
                        key,
                        handlers::HandleKeyContext {
                            app: &mut app,
                            assistant: &assistant,
                            pending: &mut pending,
                            rt: &rt,
                        },
                    );
                    if result == HandleResult::Break {
                        if let Some(p) = pending.take() {
                            p.cancel_token.cancel();
                        }
                        break;
                    }
                }
                _ => {}
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
