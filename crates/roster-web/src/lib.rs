//! HTTP form surface for the roster employee directory.
//!
//! Exposes an axum [`Router`] mapping the six form routes onto the SQLite
//! store. Every request opens its own store connection and closes it when
//! the handler returns; no store state is shared across requests.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod views;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{any, get},
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use auth::KeywordGate;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
///
/// Every field has a default, so the server runs with no config file at all:
/// the store lands in `roster.db` next to the process and the login keyword
/// is `Admin`.
#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  /// Path of the SQLite database file; created lazily on first use.
  pub store_path:    PathBuf,
  /// The single shared keyword accepted by the login gate.
  pub admin_keyword: String,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:          "127.0.0.1".to_string(),
      port:          5000,
      store_path:    PathBuf::from("roster.db"),
      admin_keyword: "Admin".to_string(),
    }
  }
}

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
///
/// Deliberately holds no open store connection: handlers open their own from
/// `config.store_path` and drop it when the request completes.
#[derive(Clone)]
pub struct AppState {
  pub config: Arc<ServerConfig>,
  pub auth:   Arc<KeywordGate>,
}

impl AppState {
  pub fn new(config: ServerConfig) -> Self {
    let auth = KeywordGate::new(config.admin_keyword.clone());
    Self {
      config: Arc::new(config),
      auth:   Arc::new(auth),
    }
  }
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the directory server.
pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/", get(handlers::login::page).post(handlers::login::submit))
    // The admin page renders the same regardless of method, UPDATE and
    // DELETE included, so accept anything.
    .route("/admin",        any(handlers::admin::page))
    .route("/display_data", get(handlers::admin::display_data))
    .route(
      "/add_data",
      get(handlers::add::handler).post(handlers::add::handler),
    )
    .route(
      "/delete_data",
      get(handlers::delete::handler).post(handlers::delete::handler),
    )
    .route(
      "/update_data",
      get(handlers::update::handler).post(handlers::update::handler),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
