//! Name-based enrichment for Roster.
//!
//! [`Aggregator`] queries an age, a gender and a nationality
//! [`AttributeSource`] concurrently and merges whatever they return into a
//! [`roster_core::enrichment::Enrichment`]. The HTTP sources in [`http`]
//! speak the agify / genderize / nationalize response formats.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
#![allow(async_fn_in_trait)]

mod aggregator;
mod config;
mod error;
mod source;

pub mod http;

pub use aggregator::{Aggregator, HttpAggregator};
pub use config::EnrichmentConfig;
pub use error::SourceError;
pub use source::AttributeSource;
