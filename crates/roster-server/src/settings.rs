//! Server configuration: an optional TOML file overlaid by `ROSTER_*`
//! environment variables.
//!
//! ```toml
//! host       = "0.0.0.0"
//! port       = 8080
//! store_path = "~/.local/share/roster/roster.db"
//!
//! [enrichment]
//! age_url         = "https://api.agify.io/"
//! gender_url      = "https://api.genderize.io/"
//! nationality_url = "https://api.nationalize.io/"
//! timeout_secs    = 10
//! ```
//!
//! Nested keys use a double underscore in the environment, e.g.
//! `ROSTER_ENRICHMENT__TIMEOUT_SECS=5`.

use std::path::{Path, PathBuf};

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use roster_enrich::EnrichmentConfig;
use serde::Deserialize;

/// Runtime server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  pub enrichment: EnrichmentConfig,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       "0.0.0.0".to_owned(),
      port:       8080,
      store_path: PathBuf::from("roster.db"),
      enrichment: EnrichmentConfig::default(),
    }
  }
}

impl ServerConfig {
  /// Read `path` (if it exists) and then the environment.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::from_builder(
      Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
          Environment::with_prefix("ROSTER")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
        ),
    )
  }

  fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
    builder.build()?.try_deserialize()
  }

  /// `store_path` with a leading `~` expanded to the user's home directory.
  pub fn resolved_store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }
}

fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
