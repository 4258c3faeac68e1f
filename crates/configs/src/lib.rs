use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

/// Where the three collections and uploaded images live on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_categories_file")]
    pub categories_file: String,
    #[serde(default = "default_locations_file")]
    pub locations_file: String,
    #[serde(default = "default_items_file")]
    pub items_file: String,
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            categories_file: default_categories_file(),
            locations_file: default_locations_file(),
            items_file: default_items_file(),
            uploads_dir: default_uploads_dir(),
        }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8000 }
fn default_data_dir() -> PathBuf { PathBuf::from("data") }
fn default_categories_file() -> String { "categories.json".into() }
fn default_locations_file() -> String { "locations.json".into() }
fn default_items_file() -> String { "items.json".into() }
fn default_uploads_dir() -> PathBuf { PathBuf::from("public/images") }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Build a config purely from env vars, used when no config file is present.
    pub fn from_env() -> Self {
        let mut cfg = AppConfig::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        if let Ok(dir) = std::env::var("DATA_DIR") {
            cfg.storage.data_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("UPLOADS_DIR") {
            cfg.storage.uploads_dir = PathBuf::from(dir);
        }
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<()> {
        for (key, name) in [
            ("storage.categories_file", &self.categories_file),
            ("storage.locations_file", &self.locations_file),
            ("storage.items_file", &self.items_file),
        ] {
            if name.trim().is_empty() {
                return Err(anyhow!("{key} must not be empty"));
            }
        }
        if self.data_dir.as_os_str().is_empty() {
            return Err(anyhow!("storage.data_dir must not be empty"));
        }
        Ok(())
    }

    pub fn categories_path(&self) -> PathBuf { self.data_dir.join(&self.categories_file) }
    pub fn locations_path(&self) -> PathBuf { self.data_dir.join(&self.locations_file) }
    pub fn items_path(&self) -> PathBuf { self.data_dir.join(&self.items_file) }
}
