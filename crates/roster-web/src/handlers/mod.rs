pub mod add;
pub mod admin;
pub mod delete;
pub mod login;
pub mod update;

use roster_store_sqlite::SqliteStore;

use crate::{AppState, error::Error};

/// Open a fresh store connection for the current request.
///
/// The connection is scoped to the handler: it is dropped, and with it the
/// SQLite handle released, on every exit path — including early
/// validation-failure returns. No connection outlives its request.
pub(crate) async fn open_store(state: &AppState) -> Result<SqliteStore, Error> {
  Ok(SqliteStore::open(&state.config.store_path).await?)
}
