//! SQL schema for the Roster SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT keeps ids of deleted rows from ever being reissued.
CREATE TABLE IF NOT EXISTS people (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT    NOT NULL,
    surname     TEXT    NOT NULL,
    patronymic  TEXT,                       -- NULL when absent, '' is kept as ''
    age         INTEGER,                    -- NULL when enrichment had no answer
    gender      TEXT    NOT NULL DEFAULT '',
    nationality TEXT    NOT NULL DEFAULT '' -- ISO 3166-1 alpha-2
);

CREATE INDEX IF NOT EXISTS people_name_idx    ON people(name);
CREATE INDEX IF NOT EXISTS people_surname_idx ON people(surname);
CREATE INDEX IF NOT EXISTS people_gender_idx  ON people(gender);
CREATE INDEX IF NOT EXISTS people_age_idx     ON people(age);

PRAGMA user_version = 1;
";
