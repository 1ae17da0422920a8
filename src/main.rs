//! # wikichat - quick answers in the terminal
//!
//! Entry point for wikichat, a small chat assistant that strips question
//! phrasing ("What is", "How does", ...) from the input, evaluates simple
//! arithmetic locally, and otherwise fetches an encyclopedia summary.
//!
//! ## Modes
//! - Single prompt mode with `-p` or `--prompt`
//! - Interactive terminal UI (TUI) with a chat log and a history panel
//! - `config` and `completions` subcommands

mod cli;
mod core;
mod run;
mod tui;

use std::io;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use crate::cli::{Args, Commands};
use crate::core::assistant::Assistant;
use crate::core::lookup::SummaryClient;
use crate::core::query::QueryRules;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    match args.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = Args::command();
            cli::generate(shell, &mut cmd, core::app::NAME, &mut io::stdout());
            return Ok(());
        }
        Some(Commands::Config) => {
            core::cli::run_config();
            return Ok(());
        }
        None => {}
    }

    // Exit uses Display, not Debug, for a user-friendly message
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    log::debug!("Loaded config: {:?}", config);

    let (rules, notice) = QueryRules::load()?;
    let client = SummaryClient::new(&config)?;
    let assistant = Assistant::new(rules, client);

    if args.prompt.is_some() {
        return run::run_single_prompt(&args, &assistant).await;
    }

    run::launch_tui(config, assistant, notice).await
}
