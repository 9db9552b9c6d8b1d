//! [`Aggregator`], the [`Enricher`] implementation.

use std::time::Duration;

use reqwest::Client;
use roster_core::enrichment::{Attribute, Enricher, Enrichment, Lookup};
use tracing::{debug, warn};

use crate::{
  AttributeSource, EnrichmentConfig, SourceError,
  http::{AgeApi, Endpoint, GenderApi, NationalityApi},
};

/// Runs the age, gender and nationality lookups for a name concurrently and
/// waits for all three before merging. One failing source never affects the
/// other two.
pub struct Aggregator<A, G, N> {
  age:         A,
  gender:      G,
  nationality: N,
}

/// The production aggregator, backed by the HTTP sources.
pub type HttpAggregator = Aggregator<AgeApi, GenderApi, NationalityApi>;

impl<A, G, N> Aggregator<A, G, N> {
  pub fn new(age: A, gender: G, nationality: N) -> Self {
    Self { age, gender, nationality }
  }
}

impl HttpAggregator {
  /// Build HTTP sources for the endpoints in `config`, sharing one client.
  pub fn from_config(config: &EnrichmentConfig) -> Result<Self, SourceError> {
    let mut builder = Client::builder();
    if let Some(secs) = config.timeout_secs {
      builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build().map_err(SourceError::Transport)?;

    Ok(Self::new(
      AgeApi::new(Endpoint::new(client.clone(), &config.age_url)),
      GenderApi::new(Endpoint::new(client.clone(), &config.gender_url)),
      NationalityApi::new(Endpoint::new(client, &config.nationality_url)),
    ))
  }
}

impl<A, G, N> Enricher for Aggregator<A, G, N>
where
  A: AttributeSource<Value = i32>,
  G: AttributeSource<Value = String>,
  N: AttributeSource<Value = String>,
{
  async fn enrich(&self, name: &str) -> Enrichment {
    let name = name.trim();
    if name.is_empty() {
      return Enrichment::none();
    }

    let (age, gender, nationality) = tokio::join!(
      run(Attribute::Age, &self.age, name),
      run(Attribute::Gender, &self.gender, name),
      run(Attribute::Nationality, &self.nationality, name),
    );

    Enrichment { age, gender, nationality }
  }
}

async fn run<S: AttributeSource>(
  attribute: Attribute,
  source: &S,
  name: &str,
) -> Lookup<S::Value> {
  match source.lookup(name).await {
    Ok(Some(value)) => Lookup::Found(value),
    Ok(None) => {
      debug!(%attribute, given_name = name, "no signal from source");
      Lookup::NoSignal
    }
    Err(e) => {
      warn!(%attribute, given_name = name, error = %e, "enrichment lookup failed");
      Lookup::Failed(e.to_string())
    }
  }
}
