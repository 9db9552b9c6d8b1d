//! Filter and pagination types for [`crate::store::PersonStore::list`].
//!
//! Filter keys are a closed set. Anything a caller sends that is not a
//! [`FilterKey`] (or `limit`/`offset`) is dropped here, before a backend ever
//! sees it, so backends only have to map four known keys to columns.

use std::str::FromStr;

use strum::{AsRefStr, EnumString};

use crate::{Error, Result};

/// Page size used when the caller does not send `limit`.
pub const DEFAULT_LIMIT: u32 = 10;

/// Upper bound on `limit`; larger requests are clamped.
pub const MAX_LIMIT: u32 = 100;

// ─── Filter keys ─────────────────────────────────────────────────────────────

/// The columns a listing may be filtered on, by equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum FilterKey {
  Name,
  Surname,
  Gender,
  Age,
}

/// A typed filter operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
  Text(String),
  Int(i32),
}

// ─── PersonFilter ────────────────────────────────────────────────────────────

/// Equality constraints, all of which must hold. `None` means "no constraint
/// on that column", never "match null".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonFilter {
  pub name:    Option<String>,
  pub surname: Option<String>,
  pub gender:  Option<String>,
  pub age:     Option<i32>,
}

impl PersonFilter {
  /// Set `key` from its raw string form. An empty value clears the
  /// constraint; a non-numeric `age` is rejected.
  pub fn set(&mut self, key: FilterKey, raw: &str) -> Result<()> {
    let raw = raw.trim();
    let text = (!raw.is_empty()).then(|| raw.to_owned());

    match key {
      FilterKey::Name => self.name = text,
      FilterKey::Surname => self.surname = text,
      FilterKey::Gender => self.gender = text,
      FilterKey::Age => {
        self.age = text
          .map(|t| {
            t.parse::<i32>().map_err(|_| {
              Error::invalid(format!("age filter must be an integer, got {t:?}"))
            })
          })
          .transpose()?;
      }
    }
    Ok(())
  }

  /// The active constraints in a fixed key order.
  pub fn conditions(&self) -> Vec<(FilterKey, FilterValue)> {
    let mut out = Vec::new();
    if let Some(v) = &self.name {
      out.push((FilterKey::Name, FilterValue::Text(v.clone())));
    }
    if let Some(v) = &self.surname {
      out.push((FilterKey::Surname, FilterValue::Text(v.clone())));
    }
    if let Some(v) = &self.gender {
      out.push((FilterKey::Gender, FilterValue::Text(v.clone())));
    }
    if let Some(v) = self.age {
      out.push((FilterKey::Age, FilterValue::Int(v)));
    }
    out
  }

  pub fn is_empty(&self) -> bool {
    self.name.is_none() && self.surname.is_none() && self.gender.is_none() && self.age.is_none()
  }
}

// ─── Page ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
  pub limit:  u32,
  pub offset: u32,
}

impl Default for Page {
  fn default() -> Self { Self { limit: DEFAULT_LIMIT, offset: 0 } }
}

impl Page {
  pub fn new(limit: u32, offset: u32) -> Self {
    Self { limit: limit.min(MAX_LIMIT), offset }
  }
}

// ─── PersonQuery ─────────────────────────────────────────────────────────────

/// Parameters for [`crate::store::PersonStore::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonQuery {
  pub filter: PersonFilter,
  pub page:   Page,
}

/// A query parsed from untrusted key/value pairs, plus the keys that were
/// not recognised and therefore ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
  pub query:   PersonQuery,
  pub ignored: Vec<String>,
}

impl PersonQuery {
  /// Parse a query from raw pairs such as a URL query string.
  ///
  /// `limit` and `offset` must be non-negative integers when present. Other
  /// keys are matched against [`FilterKey`]; unknown keys are collected in
  /// [`ParsedQuery::ignored`]. A repeated key keeps its last value.
  pub fn from_pairs<I, K, V>(pairs: I) -> Result<ParsedQuery>
  where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
  {
    let mut filter = PersonFilter::default();
    let mut limit = DEFAULT_LIMIT;
    let mut offset = 0;
    let mut ignored = Vec::new();

    for (key, value) in pairs {
      let (key, value) = (key.as_ref(), value.as_ref());
      match key {
        "limit" => limit = parse_bound("limit", value)?.unwrap_or(DEFAULT_LIMIT),
        "offset" => offset = parse_bound("offset", value)?.unwrap_or(0),
        other => match FilterKey::from_str(other) {
          Ok(k) => filter.set(k, value)?,
          Err(_) => ignored.push(other.to_owned()),
        },
      }
    }

    Ok(ParsedQuery {
      query: PersonQuery { filter, page: Page::new(limit, offset) },
      ignored,
    })
  }
}

fn parse_bound(field: &str, raw: &str) -> Result<Option<u32>> {
  let raw = raw.trim();
  if raw.is_empty() {
    return Ok(None);
  }
  raw.parse::<u32>().map(Some).map_err(|_| {
    Error::invalid(format!("{field} must be a non-negative integer, got {raw:?}"))
  })
}
