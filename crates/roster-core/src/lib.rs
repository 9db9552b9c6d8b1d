//! Core types and trait definitions for the Roster person registry.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement [`store::PersonStore`], attribute lookups
//! implement [`enrichment::Enricher`], and [`service::PersonService`] ties the
//! two together into the create/list/update/delete workflow.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod enrichment;
pub mod error;
pub mod person;
pub mod query;
pub mod service;
pub mod store;

pub use error::{Error, Result};
