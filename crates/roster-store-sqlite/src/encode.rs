//! Mapping between `people` rows and [`Person`].
//!
//! Every SELECT in this crate lists [`PERSON_COLUMNS`] in this exact order so
//! [`read_person`] can address columns by index.

use roster_core::person::Person;

pub const PERSON_COLUMNS: &str =
  "id, name, surname, patronymic, age, gender, nationality";

pub fn read_person(row: &rusqlite::Row<'_>) -> rusqlite::Result<Person> {
  Ok(Person {
    id:          row.get(0)?,
    name:        row.get(1)?,
    surname:     row.get(2)?,
    patronymic:  row.get(3)?,
    age:         row.get(4)?,
    gender:      row.get(5)?,
    nationality: row.get(6)?,
  })
}
