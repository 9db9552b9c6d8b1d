//! Error type for `roster-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// `INSERT ... RETURNING id` produced no row.
  #[error("insert returned no id")]
  MissingId,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
