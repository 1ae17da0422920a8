//! Application run modes: logger init, single prompt, TUI launch.

use std::io::{self, Write};
use std::sync::Arc;

use crate::cli::Args;
use crate::core;
use crate::core::assistant::{Assistant, ChatView, HistoryEntry, Role};
use crate::core::config::Config;
use crate::core::lookup::SummaryClient;

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.prompt.is_none()
        && args.command.is_none()
        && let Some(path) = core::paths::log_path()
    {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Prompt-mode view: replies to stdout, history entries (optionally) to stderr.
/// The user line is not echoed; the caller already has the question.
struct StdoutView {
    show_history: bool,
}

impl ChatView for StdoutView {
    fn append_message(&mut self, role: Role, text: &str) {
        if role == Role::Ai {
            let mut out = io::stdout();
            let _ = writeln!(out, "{}", text);
            let _ = out.flush();
        }
    }

    fn append_history(&mut self, entry: HistoryEntry) {
        if self.show_history {
            let _ = writeln!(io::stderr(), "[history] {}", entry.label());
        }
    }
}

/// Run single prompt mode: answer one question, print the reply to stdout.
pub async fn run_single_prompt(
    args: &Args,
    assistant: &Assistant<SummaryClient>,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(prompt_arg) = args.prompt.as_ref() else {
        return Ok(());
    };
    let prompt = if prompt_arg == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        prompt_arg.clone()
    };
    let prompt = prompt.trim();
    if prompt.is_empty() {
        eprintln!("Error: empty prompt");
        std::process::exit(1);
    }

    let mut view = StdoutView {
        show_history: args.history,
    };
    assistant.submit(prompt, &mut view).await;
    Ok(())
}

/// Launch the TUI in a blocking thread. Returns on panic or IO error.
pub async fn launch_tui(
    config: Config,
    assistant: Assistant<SummaryClient>,
    notice: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(config);
    let assistant = Arc::new(assistant);
    let join_result: Result<io::Result<()>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || crate::tui::run(config, assistant, notice)).await;

    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(
                Box::new(io::Error::other("TUI thread panicked")) as Box<dyn std::error::Error>
            );
        }
    }
    Ok(())
}
