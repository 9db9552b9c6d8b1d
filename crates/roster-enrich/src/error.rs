//! Error type for a single attribute lookup.

use thiserror::Error;

/// Why a lookup produced no answer. Never escapes the aggregator; it is
/// logged and folded into [`roster_core::enrichment::Lookup::Failed`].
#[derive(Debug, Error)]
pub enum SourceError {
  #[error("request timed out")]
  TimedOut,

  #[error("transport error: {0}")]
  Transport(#[source] reqwest::Error),

  #[error("unexpected status {0}")]
  Status(u16),

  #[error("malformed response: {0}")]
  Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for SourceError {
  fn from(err: reqwest::Error) -> Self {
    if err.is_timeout() {
      Self::TimedOut
    } else {
      Self::Transport(err)
    }
  }
}
