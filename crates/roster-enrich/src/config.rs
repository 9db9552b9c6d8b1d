//! Endpoint configuration for the HTTP attribute sources.

use serde::Deserialize;

/// Where the three lookup services live.
///
/// Deserialised from the `[enrichment]` table of the server configuration.
/// Every field has a default, so the table may be omitted entirely.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
  pub age_url:         String,
  pub gender_url:      String,
  pub nationality_url: String,
  /// Per-request timeout. `None` keeps the HTTP client default, which never
  /// times out.
  pub timeout_secs:    Option<u64>,
}

impl Default for EnrichmentConfig {
  fn default() -> Self {
    Self {
      age_url:         "https://api.agify.io/".to_owned(),
      gender_url:      "https://api.genderize.io/".to_owned(),
      nationality_url: "https://api.nationalize.io/".to_owned(),
      timeout_secs:    None,
    }
  }
}
