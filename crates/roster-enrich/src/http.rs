//! HTTP attribute sources.
//!
//! Each source issues `GET <url>?name=<name>` and decodes one of the
//! following response shapes:
//!
//! | Source | Body |
//! |--------|------|
//! | [`AgeApi`] | `{"age": 34}` (or `null`) |
//! | [`GenderApi`] | `{"gender": "male"}` (or `null`) |
//! | [`NationalityApi`] | `{"country": [{"country_id": "RU", "probability": 0.4}, ...]}` |

use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};

use crate::{AttributeSource, SourceError};

// ─── Endpoint ────────────────────────────────────────────────────────────────

/// A lookup URL plus the client used to reach it.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct Endpoint {
  client: Client,
  url:    String,
}

impl Endpoint {
  pub fn new(client: Client, url: impl Into<String>) -> Self {
    Self { client, url: url.into() }
  }

  /// `GET <url>?name=<name>`; non-2xx statuses count as failures.
  async fn fetch<T: DeserializeOwned>(&self, name: &str) -> Result<T, SourceError> {
    let resp = self
      .client
      .get(&self.url)
      .query(&[("name", name)])
      .send()
      .await?;

    let status = resp.status();
    if !status.is_success() {
      return Err(SourceError::Status(status.as_u16()));
    }

    let body = resp.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
  }
}

// ─── Response shapes ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct AgeResponse {
  #[serde(default)]
  age: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct GenderResponse {
  #[serde(default)]
  gender: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NationalityResponse {
  #[serde(default)]
  country: Option<Vec<CountryCandidate>>,
}

/// One ranked entry of a nationality response; the list arrives sorted by
/// descending probability, which is all we rely on.
#[derive(Debug, Deserialize)]
struct CountryCandidate {
  country_id: String,
}

// ─── Sources ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AgeApi(Endpoint);

impl AgeApi {
  pub fn new(endpoint: Endpoint) -> Self { Self(endpoint) }
}

impl AttributeSource for AgeApi {
  type Value = i32;

  async fn lookup(&self, name: &str) -> Result<Option<i32>, SourceError> {
    let res: AgeResponse = self.0.fetch(name).await?;
    Ok(res.age)
  }
}

#[derive(Debug, Clone)]
pub struct GenderApi(Endpoint);

impl GenderApi {
  pub fn new(endpoint: Endpoint) -> Self { Self(endpoint) }
}

impl AttributeSource for GenderApi {
  type Value = String;

  async fn lookup(&self, name: &str) -> Result<Option<String>, SourceError> {
    let res: GenderResponse = self.0.fetch(name).await?;
    Ok(res.gender.filter(|g| !g.is_empty()))
  }
}

#[derive(Debug, Clone)]
pub struct NationalityApi(Endpoint);

impl NationalityApi {
  pub fn new(endpoint: Endpoint) -> Self { Self(endpoint) }
}

impl AttributeSource for NationalityApi {
  type Value = String;

  /// Takes the top-ranked candidate; an empty list is no signal.
  async fn lookup(&self, name: &str) -> Result<Option<String>, SourceError> {
    let res: NationalityResponse = self.0.fetch(name).await?;
    Ok(
      res
        .country
        .unwrap_or_default()
        .into_iter()
        .next()
        .map(|c| c.country_id)
        .filter(|id| !id.is_empty()),
    )
  }
}
