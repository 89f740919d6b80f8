//! Insert handler with the emptiness check.

use axum::{
  extract::{Form, State},
  response::{IntoResponse, Redirect, Response},
};
use roster_core::{NewEmployee, store::EmployeeStore as _};
use serde::Deserialize;

use crate::{AppState, error::Error, handlers::open_store, views};

#[derive(Deserialize)]
pub struct AddForm {
  pub nme:      String,
  pub position: String,
  pub email:    String,
}

/// GET|POST /add_data — insert a record, or report empty fields inline.
pub async fn handler(
  State(state): State<AppState>,
  Form(form): Form<AddForm>,
) -> Result<Response, Error> {
  let store = open_store(&state).await?;

  let input = NewEmployee {
    name:     form.nme,
    position: form.position,
    email:    form.email,
  };

  // Emptiness is enforced here, not in the store. The early return still
  // drops the connection opened above.
  if input.has_empty_field() {
    return Ok(views::non_null_notice().into_response());
  }

  let id = store.insert(input).await?;
  tracing::debug!(id, "inserted employee");

  Ok(Redirect::to("/display_data").into_response())
}
