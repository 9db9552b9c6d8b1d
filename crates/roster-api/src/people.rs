//! Handlers for `/people` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/people` | Body: `{"name","surname","patronymic"?}`; enriches, returns 201 + record |
//! | `GET`    | `/people` | Optional `name`, `surname`, `gender`, `age`, `limit`, `offset` |
//! | `GET`    | `/people/{id}` | 404 if not found |
//! | `PUT`    | `/people/{id}` | Body: full record minus `id`; no enrichment |
//! | `DELETE` | `/people/{id}` | 204, or 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, PathRejection, QueryRejection},
  },
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{
  enrichment::Enricher,
  person::{NewPerson, Person, PersonData, PersonId},
  query::PersonQuery,
  service::PersonService,
  store::PersonStore,
};
use tracing::debug;

use crate::error::ApiError;

type Service<S, E> = Arc<PersonService<S, E>>;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /people[?name=...][&surname=...][&gender=...][&age=...][&limit=...][&offset=...]`
///
/// Unrecognised query keys are ignored.
pub async fn list<S, E>(
  State(service): State<Service<S, E>>,
  params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Person>>, ApiError>
where
  S: PersonStore,
  E: Enricher,
{
  let Query(pairs) = params?;
  let parsed = PersonQuery::from_pairs(pairs)?;
  if !parsed.ignored.is_empty() {
    debug!(ignored = ?parsed.ignored, "ignoring unknown filter keys");
  }

  let people = service.list(&parsed.query).await?;
  Ok(Json(people))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /people`. Returns 201 + the stored, enriched [`Person`].
pub async fn create<S, E>(
  State(service): State<Service<S, E>>,
  body: Result<Json<NewPerson>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PersonStore,
  E: Enricher,
{
  let Json(body) = body?;
  let person = service.create(body).await?;
  Ok((StatusCode::CREATED, Json(person)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /people/{id}`
pub async fn get_one<S, E>(
  State(service): State<Service<S, E>>,
  id: Result<Path<PersonId>, PathRejection>,
) -> Result<Json<Person>, ApiError>
where
  S: PersonStore,
  E: Enricher,
{
  let Path(id) = id?;
  Ok(Json(service.get(id).await?))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /people/{id}`. Overwrites the whole record, derived fields included.
pub async fn update<S, E>(
  State(service): State<Service<S, E>>,
  id: Result<Path<PersonId>, PathRejection>,
  body: Result<Json<PersonData>, JsonRejection>,
) -> Result<Json<Person>, ApiError>
where
  S: PersonStore,
  E: Enricher,
{
  let Path(id) = id?;
  let Json(body) = body?;
  Ok(Json(service.update(id, body).await?))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /people/{id}`
pub async fn delete_one<S, E>(
  State(service): State<Service<S, E>>,
  id: Result<Path<PersonId>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
  S: PersonStore,
  E: Enricher,
{
  let Path(id) = id?;
  service.delete(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
