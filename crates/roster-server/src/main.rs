//! `roster` server binary.
//!
//! Reads `roster.toml` (or the path given with `--config`), opens the SQLite
//! store, and serves the `/people` JSON API over HTTP.
//!
//! ```
//! cargo run -p roster-server -- --config roster.toml
//! ```

mod settings;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use roster_core::service::PersonService;
use roster_enrich::HttpAggregator;
use roster_store_sqlite::SqliteStore;
use settings::ServerConfig;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Roster person registry server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "roster.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to read config from {:?}", cli.config))?;

  let store_path = server_cfg.resolved_store_path();
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let enricher = HttpAggregator::from_config(&server_cfg.enrichment)
    .context("failed to build enrichment client")?;
  tracing::info!(
    age = %server_cfg.enrichment.age_url,
    gender = %server_cfg.enrichment.gender_url,
    nationality = %server_cfg.enrichment.nationality_url,
    "enrichment sources configured"
  );

  let service = Arc::new(PersonService::new(store, enricher));
  let app = roster_api::api_router(service).layer(TraceLayer::new_for_http());
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(async {
      let _ = tokio::signal::ctrl_c().await;
      tracing::info!("shutting down");
    })
    .await
    .context("server error")?;

  Ok(())
}
