//! The admin page, with and without the records table.

use axum::{extract::State, response::Html};
use roster_core::store::EmployeeStore as _;

use crate::{AppState, error::Error, handlers::open_store, views};

/// `/admin` — render the admin page.
///
/// Registered for any method, UPDATE and DELETE included; the method is
/// ignored entirely. Does not read the store.
pub async fn page() -> Html<String> {
  views::admin_page(None)
}

/// GET /display_data — admin page populated with every record.
pub async fn display_data(
  State(state): State<AppState>,
) -> Result<Html<String>, Error> {
  let store = open_store(&state).await?;
  let employees = store.list_all().await?;
  Ok(views::admin_page(Some(&employees)))
}
