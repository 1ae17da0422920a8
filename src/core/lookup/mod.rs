//! Encyclopedia summary lookup: the `SummarySource` seam, the HTTP client, and extract shaping.

mod client;
mod error;

pub use client::SummaryClient;
pub use error::LookupError;

use std::future::Future;

use serde::Deserialize;

/// Number of leading paragraphs kept from an extract.
pub const EXTRACT_PARAGRAPHS: usize = 2;

/// Body of a summary response. Only `extract` is used; everything else is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub extract: Option<String>,
}

/// Anything that can turn a search term into an optional extract.
/// `Ok(None)` means the service answered but has nothing for the term.
pub trait SummarySource {
    fn fetch_extract(
        &self,
        term: &str,
    ) -> impl Future<Output = Result<Option<String>, LookupError>> + Send;
}

/// Keep the first `count` newline-delimited paragraphs, joined by a blank line.
pub fn first_paragraphs(extract: &str, count: usize) -> String {
    extract
        .split('\n')
        .take(count)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Decode a summary body and return its extract when non-empty.
pub fn parse_extract(body: &str) -> Result<Option<String>, LookupError> {
    let summary: Summary = serde_json::from_str(body)?;
    Ok(summary.extract.filter(|s| !s.is_empty()))
}
