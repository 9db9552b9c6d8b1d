//! The `Person` record and the payloads used to create and overwrite it.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Store-assigned row identifier.
pub type PersonId = i64;

// ─── Person ──────────────────────────────────────────────────────────────────

/// A persisted person. `age`, `gender` and `nationality` are derived by
/// enrichment on creation and may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub id:          PersonId,
  pub name:        String,
  pub surname:     String,
  pub patronymic:  Option<String>,
  pub age:         Option<i32>,
  pub gender:      String,
  /// ISO 3166-1 alpha-2 country code, e.g. `"RU"`.
  pub nationality: String,
}

// ─── NewPerson ───────────────────────────────────────────────────────────────

/// Input to [`crate::service::PersonService::create`]. Derived fields are
/// never accepted from callers on creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewPerson {
  pub name:       String,
  pub surname:    String,
  #[serde(default)]
  pub patronymic: Option<String>,
}

impl NewPerson {
  pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
    Self { name: name.into(), surname: surname.into(), patronymic: None }
  }

  /// Strip surrounding whitespace from every text field, so stored values
  /// match the trimmed operands of list filters.
  pub fn trimmed(self) -> Self {
    Self {
      name:       trim(self.name),
      surname:    trim(self.surname),
      patronymic: self.patronymic.map(trim),
    }
  }

  pub fn validate(&self) -> Result<()> {
    require("name", &self.name)?;
    require("surname", &self.surname)
  }
}

// ─── PersonData ──────────────────────────────────────────────────────────────

/// Every column of a person except `id`.
///
/// Used both as the insert payload (after enrichment) and as the full
/// replacement body of an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonData {
  pub name:        String,
  pub surname:     String,
  #[serde(default)]
  pub patronymic:  Option<String>,
  #[serde(default)]
  pub age:         Option<i32>,
  #[serde(default)]
  pub gender:      String,
  #[serde(default)]
  pub nationality: String,
}

impl PersonData {
  /// See [`NewPerson::trimmed`].
  pub fn trimmed(self) -> Self {
    Self {
      name:        trim(self.name),
      surname:     trim(self.surname),
      patronymic:  self.patronymic.map(trim),
      age:         self.age,
      gender:      trim(self.gender),
      nationality: trim(self.nationality),
    }
  }

  pub fn validate(&self) -> Result<()> {
    require("name", &self.name)?;
    require("surname", &self.surname)?;
    if let Some(age) = self.age
      && age < 0
    {
      return Err(Error::invalid(format!("age must be non-negative, got {age}")));
    }
    Ok(())
  }

  pub fn into_person(self, id: PersonId) -> Person {
    Person {
      id,
      name: self.name,
      surname: self.surname,
      patronymic: self.patronymic,
      age: self.age,
      gender: self.gender,
      nationality: self.nationality,
    }
  }
}

impl From<NewPerson> for PersonData {
  fn from(p: NewPerson) -> Self {
    PersonData {
      name: p.name,
      surname: p.surname,
      patronymic: p.patronymic,
      ..Default::default()
    }
  }
}

fn trim(value: String) -> String {
  let trimmed = value.trim();
  if trimmed.len() == value.len() {
    return value;
  }
  trimmed.to_owned()
}

fn require(field: &str, value: &str) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::invalid(format!("{field} must not be empty")));
  }
  Ok(())
}
