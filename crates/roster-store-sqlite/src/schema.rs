//! SQL schema for the employees relation.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
/// Running it against an existing database never destroys data.
///
/// AUTOINCREMENT keeps ids strictly increasing: a deleted id is never
/// reassigned to a later insert.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS employees (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    name     TEXT,
    position TEXT,
    email    TEXT
);
";
