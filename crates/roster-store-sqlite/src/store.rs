//! [`SqliteStore`] — the SQLite implementation of [`EmployeeStore`].

use std::path::Path;

use roster_core::{
  employee::{Employee, NewEmployee},
  store::EmployeeStore,
};

use crate::{Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An employee store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Dropping the
/// last clone closes the underlying SQLite handle.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── EmployeeStore impl ──────────────────────────────────────────────────────

impl EmployeeStore for SqliteStore {
  type Error = crate::Error;

  async fn list_all(&self) -> Result<Vec<Employee>> {
    let rows = self
      .conn
      .call(|conn| {
        // No ORDER BY: storage order, which for this access pattern is
        // insertion order.
        let mut stmt =
          conn.prepare("SELECT id, name, position, email FROM employees")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(Employee {
              id:       row.get(0)?,
              name:     row.get(1)?,
              position: row.get(2)?,
              email:    row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(rows)
  }

  async fn insert(&self, input: NewEmployee) -> Result<i64> {
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO employees (name, position, email) VALUES (?1, ?2, ?3)",
          rusqlite::params![input.name, input.position, input.email],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(id)
  }

  async fn update_by_id(&self, id: i64, input: NewEmployee) -> Result<usize> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE employees SET name = ?1, position = ?2, email = ?3
           WHERE id = ?4",
          rusqlite::params![input.name, input.position, input.email, id],
        )?)
      })
      .await?;

    Ok(affected)
  }

  async fn delete_by_id_then_name(&self, token: &str) -> Result<usize> {
    let token = token.to_owned();

    let affected = self
      .conn
      .call(move |conn| {
        // The id attempt fires only for numeric tokens and compares only
        // against the id column, so a record whose name happens to look
        // numeric never shadows (or is shadowed by) an unrelated id.
        if let Ok(id) = token.parse::<i64>() {
          let by_id = conn.execute(
            "DELETE FROM employees WHERE id = ?1",
            rusqlite::params![id],
          )?;
          if by_id > 0 {
            return Ok(by_id);
          }
        }

        Ok(conn.execute(
          "DELETE FROM employees WHERE name = ?1",
          rusqlite::params![token],
        )?)
      })
      .await?;

    Ok(affected)
  }
}
