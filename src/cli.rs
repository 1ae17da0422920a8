//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  wikichat                          Launch interactive TUI
  wikichat -p \"What is 2+2\"         Answer once, print the reply to stdout
  wikichat -p -                     Read the question from stdin
  wikichat -p Rust --history        Also print the history entry (stderr)
  wikichat config                   Show config paths and settings
  wikichat completions bash         Generate bash completions

ENVIRONMENT:
  WIKICHAT_SUMMARY_URL              Summary endpoint (default: English Wikipedia)
  WIKICHAT_TIMEOUT_SECS             Lookup timeout in seconds (default: 10)
  WIKICHAT_SHOW_TIMESTAMPS          Show times in the history panel (1/true/yes)
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "A terminal chat that answers quick math and encyclopedia questions",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Ask a single question then exit (without opening the TUI)
    #[arg(
        short = 'p',
        long,
        help = "Ask a single question and print the reply (use '-' to read from stdin)"
    )]
    pub prompt: Option<String>,

    /// In prompt mode, also print the history entry
    #[arg(long, help = "In prompt mode, also print the history entry to stderr")]
    pub history: bool,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show config paths, summary endpoint, timeout, and phrase table status
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
