//! Enrichment outcomes and the `Enricher` trait.
//!
//! An enricher derives `age`, `gender` and `nationality` from a given name.
//! Each attribute is looked up independently and its outcome is kept apart
//! from the others, so a failing source only costs its own field.

use std::future::Future;

use strum::{AsRefStr, Display};

use crate::person::PersonData;

// ─── Attribute ───────────────────────────────────────────────────────────────

/// A derived person attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Attribute {
  Age,
  Gender,
  Nationality,
}

// ─── Lookup ──────────────────────────────────────────────────────────────────

/// The outcome of a single attribute lookup.
///
/// `NoSignal` (the source answered but had nothing for this name) and
/// `Failed` (the source could not be reached or understood) both leave the
/// field unset; they are kept apart so callers can report warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
  Found(T),
  NoSignal,
  Failed(String),
}

impl<T> Lookup<T> {
  pub fn from_option(value: Option<T>) -> Self {
    match value {
      Some(v) => Self::Found(v),
      None => Self::NoSignal,
    }
  }

  pub fn found(self) -> Option<T> {
    match self {
      Self::Found(v) => Some(v),
      Self::NoSignal | Self::Failed(_) => None,
    }
  }

  pub fn is_failed(&self) -> bool { matches!(self, Self::Failed(_)) }
}

// ─── Enrichment ──────────────────────────────────────────────────────────────

/// The merged result of all three lookups for one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
  pub age:         Lookup<i32>,
  pub gender:      Lookup<String>,
  pub nationality: Lookup<String>,
}

impl Enrichment {
  /// An enrichment where no source had anything to say.
  pub fn none() -> Self {
    Self {
      age:         Lookup::NoSignal,
      gender:      Lookup::NoSignal,
      nationality: Lookup::NoSignal,
    }
  }

  /// Attributes whose lookup failed, in a fixed order.
  pub fn failures(&self) -> Vec<Attribute> {
    let mut failed = Vec::new();
    if self.age.is_failed() {
      failed.push(Attribute::Age);
    }
    if self.gender.is_failed() {
      failed.push(Attribute::Gender);
    }
    if self.nationality.is_failed() {
      failed.push(Attribute::Nationality);
    }
    failed
  }

  /// Merge into `data`. Only `Found` outcomes overwrite; anything else leaves
  /// the existing value untouched.
  pub fn apply(self, data: &mut PersonData) {
    if let Some(age) = self.age.found() {
      data.age = Some(age);
    }
    if let Some(gender) = self.gender.found() {
      data.gender = gender;
    }
    if let Some(nationality) = self.nationality.found() {
      data.nationality = nationality;
    }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Derives demographic attributes from a given name.
///
/// Enrichment is best-effort: implementations never fail, they report
/// per-attribute outcomes instead.
pub trait Enricher: Send + Sync {
  fn enrich<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Enrichment> + Send + 'a;
}
