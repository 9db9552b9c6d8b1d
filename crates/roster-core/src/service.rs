//! [`PersonService`]: the caller-facing create/list/get/update/delete
//! operations.
//!
//! Creation runs enrichment before persisting; nothing else does. Input is
//! validated before the store or any attribute source is touched.

use tracing::{debug, info, warn};

use crate::{
  Error, Result,
  enrichment::Enricher,
  person::{NewPerson, Person, PersonData, PersonId},
  query::PersonQuery,
  store::PersonStore,
};

pub struct PersonService<S, E> {
  store:    S,
  enricher: E,
}

impl<S, E> PersonService<S, E>
where
  S: PersonStore,
  E: Enricher,
{
  pub fn new(store: S, enricher: E) -> Self { Self { store, enricher } }

  pub fn store(&self) -> &S { &self.store }

  /// Validate, enrich from `input.name`, then insert.
  ///
  /// Enrichment problems never fail creation; the record is stored with
  /// whatever attributes could be derived.
  pub async fn create(&self, input: NewPerson) -> Result<Person> {
    let input = input.trimmed();
    input.validate()?;

    let enrichment = self.enricher.enrich(&input.name).await;
    let failed = enrichment.failures();
    if !failed.is_empty() {
      warn!(given_name = %input.name, ?failed, "creating person with partial enrichment");
    }

    let mut data = PersonData::from(input);
    enrichment.apply(&mut data);

    let person = self.store.insert(data).await.map_err(Error::store)?;
    info!(id = person.id, "person created");
    Ok(person)
  }

  pub async fn list(&self, query: &PersonQuery) -> Result<Vec<Person>> {
    debug!(?query, "listing people");
    self.store.list(query).await.map_err(Error::store)
  }

  pub async fn get(&self, id: PersonId) -> Result<Person> {
    check_id(id)?;
    self
      .store
      .get(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::PersonNotFound(id))
  }

  /// Overwrite the stored row verbatim. Enrichment does not run.
  pub async fn update(&self, id: PersonId, data: PersonData) -> Result<Person> {
    check_id(id)?;
    let data = data.trimmed();
    data.validate()?;

    let person = self
      .store
      .update(id, data)
      .await
      .map_err(Error::store)?
      .ok_or(Error::PersonNotFound(id))?;
    info!(id, "person updated");
    Ok(person)
  }

  pub async fn delete(&self, id: PersonId) -> Result<()> {
    check_id(id)?;
    if !self.store.delete(id).await.map_err(Error::store)? {
      return Err(Error::PersonNotFound(id));
    }
    info!(id, "person deleted");
    Ok(())
  }
}

fn check_id(id: PersonId) -> Result<()> {
  if id <= 0 {
    return Err(Error::invalid(format!("id must be positive, got {id}")));
  }
  Ok(())
}
