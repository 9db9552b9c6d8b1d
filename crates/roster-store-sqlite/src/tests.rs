//! Integration tests for `SqliteStore` against an in-memory database.

use roster_core::{
  person::{PersonData, PersonId},
  query::{Page, PersonFilter, PersonQuery},
  store::PersonStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn person(name: &str, surname: &str, age: Option<i32>, gender: &str) -> PersonData {
  PersonData {
    name: name.into(),
    surname: surname.into(),
    patronymic: None,
    age,
    gender: gender.into(),
    nationality: String::new(),
  }
}

fn filtered(filter: PersonFilter) -> PersonQuery {
  PersonQuery { filter, page: Page::default() }
}

fn ids(people: &[roster_core::person::Person]) -> Vec<PersonId> {
  people.iter().map(|p| p.id).collect()
}

// ─── Insert / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_assigns_increasing_ids() {
  let s = store().await;

  let a = s.insert(person("Ivan", "Petrov", Some(34), "male")).await.unwrap();
  let b = s.insert(person("Anna", "Ivanova", None, "")).await.unwrap();

  assert!(a.id > 0);
  assert!(b.id > a.id);
}

#[tokio::test]
async fn insert_and_get_roundtrip() {
  let s = store().await;
  let mut data = person("Ivan", "Petrov", Some(34), "male");
  data.patronymic = Some("Sergeevich".into());
  data.nationality = "RU".into();

  let created = s.insert(data).await.unwrap();
  let fetched = s.get(created.id).await.unwrap().unwrap();

  assert_eq!(fetched, created);
  assert_eq!(fetched.patronymic.as_deref(), Some("Sergeevich"));
}

#[tokio::test]
async fn missing_derived_fields_persist_as_unset() {
  let s = store().await;

  let created = s.insert(person("Zzyzx", "Unknown", None, "")).await.unwrap();
  let fetched = s.get(created.id).await.unwrap().unwrap();

  assert_eq!(fetched.age, None);
  assert!(fetched.gender.is_empty());
  assert!(fetched.nationality.is_empty());
}

#[tokio::test]
async fn empty_patronymic_is_not_null() {
  let s = store().await;
  let mut data = person("Ivan", "Petrov", None, "");
  data.patronymic = Some(String::new());

  let created = s.insert(data).await.unwrap();
  let fetched = s.get(created.id).await.unwrap().unwrap();
  assert_eq!(fetched.patronymic.as_deref(), Some(""));
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get(42).await.unwrap().is_none());
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_empty_store_is_empty() {
  let s = store().await;
  assert!(s.list(&PersonQuery::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_applies_every_filter() {
  let s = store().await;
  let ivan = s.insert(person("Ivan", "Petrov", Some(34), "male")).await.unwrap();
  s.insert(person("Ivan", "Sidorov", Some(51), "male")).await.unwrap();
  s.insert(person("Maria", "Petrova", Some(34), "female")).await.unwrap();

  let hits = s
    .list(&filtered(PersonFilter {
      gender: Some("male".into()),
      age: Some(34),
      ..Default::default()
    }))
    .await
    .unwrap();

  assert_eq!(ids(&hits), vec![ivan.id]);
}

#[tokio::test]
async fn list_by_name_and_surname() {
  let s = store().await;
  s.insert(person("Ivan", "Petrov", None, "")).await.unwrap();
  let target = s.insert(person("Ivan", "Sidorov", None, "")).await.unwrap();
  s.insert(person("Oleg", "Sidorov", None, "")).await.unwrap();

  let hits = s
    .list(&filtered(PersonFilter {
      name: Some("Ivan".into()),
      surname: Some("Sidorov".into()),
      ..Default::default()
    }))
    .await
    .unwrap();

  assert_eq!(ids(&hits), vec![target.id]);
}

#[tokio::test]
async fn list_with_no_match_is_empty() {
  let s = store().await;
  s.insert(person("Ivan", "Petrov", Some(34), "male")).await.unwrap();

  let hits = s
    .list(&filtered(PersonFilter {
      gender: Some("female".into()),
      ..Default::default()
    }))
    .await
    .unwrap();
  assert!(hits.is_empty());
}

#[tokio::test]
async fn hostile_filter_value_matches_nothing() {
  let s = store().await;
  s.insert(person("Ivan", "Petrov", None, "")).await.unwrap();

  let hits = s
    .list(&filtered(PersonFilter {
      name: Some("x' OR '1'='1".into()),
      ..Default::default()
    }))
    .await
    .unwrap();
  assert!(hits.is_empty());
}

#[tokio::test]
async fn pagination_returns_stable_slices() {
  let s = store().await;
  let mut all = Vec::new();
  for i in 0..7 {
    let p = s
      .insert(person(&format!("P{i}"), "Same", None, "male"))
      .await
      .unwrap();
    all.push(p.id);
  }

  let page = |limit, offset| PersonQuery {
    filter: PersonFilter {
      gender: Some("male".into()),
      ..Default::default()
    },
    page:   Page::new(limit, offset),
  };

  let first = s.list(&page(3, 0)).await.unwrap();
  let second = s.list(&page(3, 3)).await.unwrap();
  let last = s.list(&page(3, 6)).await.unwrap();
  let beyond = s.list(&page(3, 10)).await.unwrap();

  assert_eq!(ids(&first), all[0..3].to_vec());
  assert_eq!(ids(&second), all[3..6].to_vec());
  assert_eq!(ids(&last), all[6..7].to_vec());
  assert!(beyond.is_empty());
}

#[tokio::test]
async fn default_page_is_ten_rows() {
  let s = store().await;
  for i in 0..12 {
    s.insert(person(&format!("P{i}"), "Same", None, "")).await.unwrap();
  }
  assert_eq!(s.list(&PersonQuery::default()).await.unwrap().len(), 10);
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_overwrites_every_column() {
  let s = store().await;
  let mut original = person("Ivan", "Petrov", Some(34), "male");
  original.patronymic = Some("Sergeevich".into());
  original.nationality = "RU".into();
  let created = s.insert(original).await.unwrap();

  let replacement = person("Ivan", "Petrov", Some(35), "");
  let updated = s.update(created.id, replacement).await.unwrap().unwrap();

  assert_eq!(updated.id, created.id);
  assert_eq!(updated.age, Some(35));
  assert_eq!(updated.patronymic, None);
  assert!(updated.nationality.is_empty());
  assert_eq!(s.get(created.id).await.unwrap().unwrap(), updated);
}

#[tokio::test]
async fn update_missing_returns_none() {
  let s = store().await;
  let result = s.update(99, person("A", "B", None, "")).await.unwrap();
  assert!(result.is_none());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_row() {
  let s = store().await;
  let p = s.insert(person("Ivan", "Petrov", None, "")).await.unwrap();

  assert!(s.delete(p.id).await.unwrap());
  assert!(s.get(p.id).await.unwrap().is_none());
  assert!(!s.delete(p.id).await.unwrap());
}

#[tokio::test]
async fn deleted_ids_are_not_reused() {
  let s = store().await;
  let a = s.insert(person("A", "A", None, "")).await.unwrap();
  s.delete(a.id).await.unwrap();

  let b = s.insert(person("B", "B", None, "")).await.unwrap();
  assert!(b.id > a.id);
}
