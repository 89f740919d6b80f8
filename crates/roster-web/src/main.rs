//! roster-web server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) and serves the
//! employee directory over HTTP. The SQLite file is created lazily by the
//! first request that touches the store.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use roster_web::{AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Roster employee-directory server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration. Every field has a default, so a missing file is fine.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);
  let app = roster_web::router(AppState::new(server_cfg));

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
