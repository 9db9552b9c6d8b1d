//! The filtered listing query builder.
//!
//! Column names come only from [`column`], a fixed match over
//! [`FilterKey`]; every operand is a numbered bound parameter. Nothing a
//! caller sends is ever spliced into the statement text.

use roster_core::query::{FilterKey, FilterValue, PersonQuery};
use rusqlite::types::Value;

use crate::encode::PERSON_COLUMNS;

/// A statement ready for `prepare` + `params_from_iter`.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
  pub sql:    String,
  pub params: Vec<Value>,
}

/// The column a filter key constrains.
pub fn column(key: FilterKey) -> &'static str {
  match key {
    FilterKey::Name => "name",
    FilterKey::Surname => "surname",
    FilterKey::Gender => "gender",
    FilterKey::Age => "age",
  }
}

/// Build `SELECT ... WHERE <a = ?1 AND ...> ORDER BY id LIMIT ? OFFSET ?`.
///
/// Rows are ordered by ascending id so consecutive pages never overlap or
/// skip rows of an unchanged table.
pub fn select_people(query: &PersonQuery) -> Statement {
  let mut params: Vec<Value> = Vec::new();
  let mut conds: Vec<String> = Vec::new();

  for (key, value) in query.filter.conditions() {
    params.push(match value {
      FilterValue::Text(s) => Value::Text(s),
      FilterValue::Int(i) => Value::Integer(i64::from(i)),
    });
    conds.push(format!("{} = ?{}", column(key), params.len()));
  }

  let where_clause = if conds.is_empty() {
    String::new()
  } else {
    format!(" WHERE {}", conds.join(" AND "))
  };

  params.push(Value::Integer(i64::from(query.page.limit)));
  let limit_idx = params.len();
  params.push(Value::Integer(i64::from(query.page.offset)));
  let offset_idx = params.len();

  Statement {
    sql: format!(
      "SELECT {PERSON_COLUMNS} FROM people{where_clause} \
       ORDER BY id ASC LIMIT ?{limit_idx} OFFSET ?{offset_idx}"
    ),
    params,
  }
}

#[cfg(test)]
mod tests {
  use roster_core::query::{Page, PersonFilter};

  use super::*;

  #[test]
  fn no_filters_still_pages_and_orders() {
    let stmt = select_people(&PersonQuery::default());
    assert_eq!(
      stmt.sql,
      "SELECT id, name, surname, patronymic, age, gender, nationality FROM people \
       ORDER BY id ASC LIMIT ?1 OFFSET ?2"
    );
    assert_eq!(stmt.params, vec![Value::Integer(10), Value::Integer(0)]);
  }

  #[test]
  fn filters_are_anded_and_bound() {
    let query = PersonQuery {
      filter: PersonFilter {
        gender: Some("male".into()),
        age: Some(34),
        ..Default::default()
      },
      page:   Page::new(5, 15),
    };

    let stmt = select_people(&query);
    assert!(
      stmt.sql.contains(" WHERE gender = ?1 AND age = ?2 ORDER BY id ASC LIMIT ?3 OFFSET ?4"),
      "sql: {}",
      stmt.sql
    );
    assert_eq!(stmt.params, vec![
      Value::Text("male".into()),
      Value::Integer(34),
      Value::Integer(5),
      Value::Integer(15),
    ]);
  }

  #[test]
  fn values_never_reach_statement_text() {
    let hostile = "x' OR '1'='1";
    let query = PersonQuery {
      filter: PersonFilter {
        name: Some(hostile.into()),
        ..Default::default()
      },
      ..Default::default()
    };

    let stmt = select_people(&query);
    assert!(!stmt.sql.contains(hostile));
    assert_eq!(stmt.params[0], Value::Text(hostile.into()));
  }

  #[test]
  fn unknown_keys_never_reach_statement_text() {
    let parsed = PersonQuery::from_pairs([
      ("surname", "Petrov"),
      ("1=1; DROP TABLE people; --", "x"),
      ("patronymic", "Ivanovich"),
    ])
    .unwrap();

    let stmt = select_people(&parsed.query);
    assert!(!stmt.sql.contains("DROP"));
    assert!(!stmt.sql.contains("patronymic ="));
    assert!(stmt.sql.contains(" WHERE surname = ?1 ORDER BY"));
    assert_eq!(stmt.params.len(), 3);
  }

  #[test]
  fn every_key_maps_to_its_own_column() {
    for (key, col) in [
      (FilterKey::Name, "name"),
      (FilterKey::Surname, "surname"),
      (FilterKey::Gender, "gender"),
      (FilterKey::Age, "age"),
    ] {
      assert_eq!(column(key), col);
    }
  }
}
