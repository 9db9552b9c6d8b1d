//! Error types for `roster-core`.

use thiserror::Error;

use crate::person::PersonId;

#[derive(Debug, Error)]
pub enum Error {
  /// The caller supplied a malformed payload, identifier, or filter value.
  #[error("invalid input: {0}")]
  InvalidInput(String),

  #[error("person not found: {0}")]
  PersonNotFound(PersonId),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn invalid(msg: impl Into<String>) -> Self { Self::InvalidInput(msg.into()) }

  /// Wrap a backend error from any [`crate::store::PersonStore`].
  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
