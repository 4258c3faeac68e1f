use std::{env, net::SocketAddr, path::Path};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::AppConfig;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};
use crate::uploads::ImageUploads;
use service::{runtime, RecordStore, StoreConfig};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load config from `CONFIG_PATH` (default `config.toml`) when that file exists,
/// otherwise from `SERVER_*`/`DATA_DIR`/`UPLOADS_DIR` env vars.
pub fn load_config() -> Result<AppConfig, StartupError> {
    let path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let mut cfg = if Path::new(&path).exists() {
        configs::load_from_file(&path).map_err(|e| StartupError::InvalidConfig(e.to_string()))?
    } else {
        AppConfig::from_env()
    };
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(cfg)
}

/// Open the record store and wire it with the upload directory.
pub async fn build_state(cfg: &AppConfig) -> Result<ServerState, StartupError> {
    let storage = &cfg.storage;
    let store_config = StoreConfig {
        categories: storage.categories_path(),
        locations: storage.locations_path(),
        items: storage.items_path(),
    };
    let store = RecordStore::open(&store_config).await?;
    Ok(ServerState::new(store, ImageUploads::new(&storage.uploads_dir)))
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let cfg = load_config()?;
    runtime::ensure_env(&cfg.storage.data_dir, &cfg.storage.uploads_dir).await?;

    let state = build_state(&cfg).await?;
    let app: Router = routes::build_router(state, build_cors());

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting inventory server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
