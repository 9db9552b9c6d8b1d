//! The `PersonStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-sqlite`).
//! [`crate::service::PersonService`] depends on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use crate::{
  person::{Person, PersonData, PersonId},
  query::PersonQuery,
};

/// Abstraction over a relational person store.
///
/// Every method maps to a single statement; the store provides per-statement
/// atomicity and nothing more is assumed.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait PersonStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new row and return it with its store-assigned `id`.
  fn insert(
    &self,
    data: PersonData,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// Retrieve a person by id. Returns `None` if not found.
  fn get(
    &self,
    id: PersonId,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// Return the page of people matching every filter in `query`, ordered by
  /// ascending id.
  fn list<'a>(
    &'a self,
    query: &'a PersonQuery,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + 'a;

  /// Overwrite every column of row `id`. Returns `None` if no such row.
  fn update(
    &self,
    id: PersonId,
    data: PersonData,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// Remove row `id`. Returns `false` if no such row.
  fn delete(
    &self,
    id: PersonId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
