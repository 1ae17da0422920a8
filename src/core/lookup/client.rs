//! HTTP client for the summary endpoint.

use reqwest::StatusCode;

use crate::core::app;
use crate::core::config::Config;

use super::{LookupError, SummarySource, parse_extract};

/// Summary endpoint client. Cheap to clone (shares the connection pool).
#[derive(Debug, Clone)]
pub struct SummaryClient {
    http: reqwest::Client,
    base_url: String,
}

impl SummaryClient {
    /// Build a client with the configured base URL and request timeout.
    pub fn new(config: &Config) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(app::user_agent())
            .build()?;
        Ok(Self {
            http,
            base_url: config.summary_url.trim_end_matches('/').to_string(),
        })
    }

    /// `{base_url}/{term}` with the term percent-encoded as a single path segment.
    pub fn summary_url(&self, term: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(term))
    }
}

impl SummarySource for SummaryClient {
    async fn fetch_extract(&self, term: &str) -> Result<Option<String>, LookupError> {
        let url = self.summary_url(term);
        log::debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            log::debug!("No summary for {:?}", term);
            return Ok(None);
        }
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        parse_extract(&body)
    }
}
