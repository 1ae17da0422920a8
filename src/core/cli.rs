//! CLI-only commands: config info.
//!
//! These run without opening the TUI and produce plain text output.

use crate::core::config::{self, ENV_SHOW_TIMESTAMPS, ENV_SUMMARY_URL, ENV_TIMEOUT_SECS};
use crate::core::paths;
use crate::core::query::QueryRules;

/// Run the `config` command: display paths, endpoint, timeout, and phrase table status.
pub fn run_config() {
    let config_dir = paths::config_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());
    let log_file = paths::log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());

    println!("Config:        {}", config_dir);
    println!("Log file:      {}", log_file);

    match config::load() {
        Ok(c) => {
            println!("Summary URL:   {} ({})", c.summary_url, source(ENV_SUMMARY_URL));
            println!(
                "Timeout:       {}s ({})",
                c.request_timeout.as_secs(),
                source(ENV_TIMEOUT_SECS)
            );
            println!(
                "Timestamps:    {} ({})",
                if c.show_timestamps { "on" } else { "off" },
                source(ENV_SHOW_TIMESTAMPS)
            );
        }
        Err(e) => println!("Settings:      invalid ({})", e),
    }

    let phrases_status = match QueryRules::load() {
        Ok((rules, None)) => format!("{} phrases", rules.phrase_count()),
        Ok((rules, Some(notice))) => format!("{} phrases ({})", rules.phrase_count(), notice),
        Err(e) => format!("unavailable ({})", e),
    };
    println!("Phrases:       {}", phrases_status);
}

fn source(key: &str) -> &'static str {
    if std::env::var(key).ok().filter(|v| !v.trim().is_empty()).is_some() {
        "from env"
    } else {
        "default"
    }
}
