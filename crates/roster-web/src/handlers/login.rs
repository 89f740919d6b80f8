//! The login page and keyword gate.

use axum::{
  extract::{Form, State},
  response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{AppState, auth::Authenticator as _, views};

#[derive(Deserialize)]
pub struct LoginForm {
  pub nm: String,
}

/// GET / — render the login form.
pub async fn page() -> Html<String> {
  views::login_page()
}

/// POST / — the single shared-keyword check.
///
/// No session is created on success; the redirect target is reachable
/// without ever logging in.
pub async fn submit(
  State(state): State<AppState>,
  Form(form): Form<LoginForm>,
) -> Response {
  if state.auth.authorize(&form.nm) {
    Redirect::to("/admin").into_response()
  } else {
    views::not_admin().into_response()
  }
}
