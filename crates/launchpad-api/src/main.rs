//! launchpad server binary.
//!
//! Reads `launchpad.toml` (or the path given with `--config`), opens the
//! SQLite catalog, imports SpaceX launch data on first start, and serves the
//! JSON API over HTTP.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
  time::Duration,
};

use anyhow::Context as _;
use clap::Parser;
use launchpad_api::ServerConfig;
use launchpad_core::{CatalogService, SyncReport, planet::Planet};
use launchpad_spacex::{DEFAULT_QUERY_URL, SpacexClient};
use launchpad_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Launchpad launch catalog server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "launchpad.toml")]
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

  // Load configuration.
  let settings = config::Config::builder()
    .set_default("host", "127.0.0.1")?
    .set_default("port", 8000)?
    .set_default("store_path", "launchpad.db")?
    .set_default("provider_url", DEFAULT_QUERY_URL)?
    .set_default("provider_timeout_secs", 30)?
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("LAUNCHPAD"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Expand `~` in store path.
  let store_path = expand_tilde(&server_cfg.store_path);

  // Open SQLite store.
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  for kepler_name in &server_cfg.planets {
    store
      .insert_planet(&Planet::new(kepler_name.as_str()))
      .await
      .with_context(|| format!("failed to add planet {kepler_name:?}"))?;
  }

  let provider = SpacexClient::new(
    server_cfg.provider_url.clone(),
    Duration::from_secs(server_cfg.provider_timeout_secs),
  )
  .context("failed to build HTTP client")?;

  // A failed import leaves the catalog half-loaded; refuse to serve it.
  let catalog = Arc::new(CatalogService::new(store));
  match catalog
    .ensure_catalog_loaded(&provider)
    .await
    .with_context(|| format!("failed to load launch data from {}", provider.url()))?
  {
    SyncReport::AlreadyLoaded => {}
    SyncReport::Imported { inserted, replaced } => {
      tracing::info!(inserted, replaced, "catalog seeded from provider");
    }
  }

  let app = launchpad_api::api_router(catalog).layer(TraceLayer::new_for_http());
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
