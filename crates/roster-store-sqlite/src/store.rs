//! [`SqliteStore`], the SQLite implementation of [`PersonStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use tracing::debug;

use roster_core::{
  person::{Person, PersonData, PersonId},
  query::PersonQuery,
  store::PersonStore,
};

use crate::{
  Error, Result,
  encode::{PERSON_COLUMNS, read_person},
  query::select_people,
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A person store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, data: PersonData) -> Result<Person> {
    let row = data.clone();

    let id: Option<PersonId> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "INSERT INTO people (name, surname, patronymic, age, gender, nationality)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6)
               RETURNING id",
              rusqlite::params![
                row.name,
                row.surname,
                row.patronymic,
                row.age,
                row.gender,
                row.nationality,
              ],
              |r| r.get(0),
            )
            .optional()?,
        )
      })
      .await?;

    let id = id.ok_or(Error::MissingId)?;
    Ok(data.into_person(id))
  }

  async fn get(&self, id: PersonId) -> Result<Option<Person>> {
    let person = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {PERSON_COLUMNS} FROM people WHERE id = ?1"),
              rusqlite::params![id],
              read_person,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(person)
  }

  async fn list(&self, query: &PersonQuery) -> Result<Vec<Person>> {
    let stmt = select_people(query);
    debug!(sql = %stmt.sql, params = stmt.params.len(), "listing people");

    let people = self
      .conn
      .call(move |conn| {
        let mut prepared = conn.prepare(&stmt.sql)?;
        let rows = prepared
          .query_map(rusqlite::params_from_iter(stmt.params.iter()), read_person)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(people)
  }

  async fn update(&self, id: PersonId, data: PersonData) -> Result<Option<Person>> {
    let row = data.clone();

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE people
              SET name = ?1, surname = ?2, patronymic = ?3,
                  age = ?4, gender = ?5, nationality = ?6
            WHERE id = ?7",
          rusqlite::params![
            row.name,
            row.surname,
            row.patronymic,
            row.age,
            row.gender,
            row.nationality,
            id,
          ],
        )?)
      })
      .await?;

    Ok((changed > 0).then(|| data.into_person(id)))
  }

  async fn delete(&self, id: PersonId) -> Result<bool> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM people WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    Ok(changed > 0)
  }
}
