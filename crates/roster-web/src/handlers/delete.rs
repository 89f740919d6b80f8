//! Delete handler — id match first, name match as the fallback.

use axum::{
  extract::{Form, State},
  response::{IntoResponse, Redirect, Response},
};
use roster_core::store::EmployeeStore as _;
use serde::Deserialize;

use crate::{AppState, error::Error, handlers::open_store, views};

#[derive(Deserialize)]
pub struct DeleteForm {
  pub deleted_employee: String,
}

/// GET|POST /delete_data — delete by id, falling back to name.
pub async fn handler(
  State(state): State<AppState>,
  Form(form): Form<DeleteForm>,
) -> Result<Response, Error> {
  let store = open_store(&state).await?;

  let affected = store
    .delete_by_id_then_name(&form.deleted_employee)
    .await?;

  if affected == 0 {
    return Ok(
      views::not_found_by_id_or_name(&form.deleted_employee).into_response(),
    );
  }

  tracing::debug!(affected, token = %form.deleted_employee, "deleted employee");
  Ok(Redirect::to("/display_data").into_response())
}
