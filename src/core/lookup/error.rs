//! Summary lookup errors.

/// Why a summary lookup failed (as opposed to succeeding without an extract).
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("summary request timed out")]
    Timeout,
    #[error("summary request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("summary service returned HTTP {0}")]
    Status(u16),
    #[error("invalid summary response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LookupError::Timeout
        } else {
            LookupError::Transport(e)
        }
    }
}
