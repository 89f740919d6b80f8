//! Update handler keyed on id.

use axum::{
  extract::{Form, State},
  response::{IntoResponse, Redirect, Response},
};
use roster_core::{NewEmployee, store::EmployeeStore as _};
use serde::Deserialize;

use crate::{AppState, error::Error, handlers::open_store, views};

#[derive(Deserialize)]
pub struct UpdateForm {
  pub id_update:       String,
  pub name_update:     String,
  pub position_update: String,
  pub email_update:    String,
}

/// GET|POST /update_data — overwrite all fields of the record with the
/// given id, or report the unmatched id inline.
///
/// The update statement runs exactly once; the result branches on the rows
/// affected.
pub async fn handler(
  State(state): State<AppState>,
  Form(form): Form<UpdateForm>,
) -> Result<Response, Error> {
  let store = open_store(&state).await?;

  let input = NewEmployee {
    name:     form.name_update,
    position: form.position_update,
    email:    form.email_update,
  };

  // A token that is not a well-formed id cannot match any row; report it
  // the same way as a numeric id with no row.
  let affected = match form.id_update.parse::<i64>() {
    Ok(id) => store.update_by_id(id, input).await?,
    Err(_) => 0,
  };

  if affected == 0 {
    return Ok(views::not_found_by_id(&form.id_update).into_response());
  }

  Ok(Redirect::to("/display_data").into_response())
}
