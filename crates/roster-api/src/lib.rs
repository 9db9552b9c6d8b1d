//! JSON REST API for Roster.
//!
//! Exposes an axum [`Router`] backed by a [`PersonService`] over any
//! [`PersonStore`] and [`Enricher`]. TLS and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = roster_api::api_router(Arc::new(PersonService::new(store, enricher)));
//! ```

pub mod error;
pub mod people;

use std::sync::Arc;

use axum::{Router, routing::get};
use roster_core::{enrichment::Enricher, service::PersonService, store::PersonStore};

pub use error::ApiError;

/// Build the `/people` router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, E>(service: Arc<PersonService<S, E>>) -> Router<()>
where
  S: PersonStore + 'static,
  E: Enricher + 'static,
{
  Router::new()
    .route("/people", get(people::list::<S, E>).post(people::create::<S, E>))
    .route(
      "/people/{id}",
      get(people::get_one::<S, E>)
        .put(people::update::<S, E>)
        .delete(people::delete_one::<S, E>),
    )
    .with_state(service)
}

// ─── Integration tests ────────────────────────────────────────────────────────
