//! # Application Configuration
//!
//! Settings are layered with the `config` crate, later sources overriding
//! earlier ones:
//!
//! 1. Built-in defaults (listen on `127.0.0.1:8080`, SQLite file
//!    `catalog.sqlite`, log level `info`).
//! 2. An optional `catalog.toml` in the working directory, or the file named
//!    by `CATALOG_CONFIG_PATH`.
//! 3. Environment variables prefixed with `CATALOG_`, nested keys separated
//!    by `__` (e.g. `CATALOG_SERVER__PORT=9000`).

use std::env;
use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::AppResult;

const CONFIG_PATH_ENV: &str = "CATALOG_CONFIG_PATH";
const DEFAULT_CONFIG_FILE: &str = "catalog";
const ENV_PREFIX: &str = "CATALOG";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Opens the catalog in the default browser once the server is up.
    pub open_browser: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub kind: DatabaseKind,
    /// SQLite file; ignored for the in-memory store.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    Sqlite,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Default `env_logger` filter, used when `RUST_LOG` is unset.
    pub level: String,
}

impl AppConfig {
    pub fn load() -> AppResult<Self> {
        let file = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => File::with_name(&path),
            Err(_) => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };
        Self::load_from(file)
    }

    fn load_from(file: File<config::FileSourceFile, config::FileFormat>) -> AppResult<Self> {
        Ok(Self::defaults()?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?)
    }

    fn defaults() -> AppResult<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080_i64)?
            .set_default("server.open_browser", false)?
            .set_default("database.kind", "sqlite")?
            .set_default("database.path", "catalog.sqlite")?
            .set_default("log.level", "info")?)
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_file() {
        let config = AppConfig::load_from(
            File::with_name("definitely-not-a-catalog-config").required(false),
        )
        .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert!(!config.server.open_browser);
        assert_eq!(config.database.kind, DatabaseKind::Sqlite);
        assert_eq!(config.database.path, PathBuf::from("catalog.sqlite"));
        assert_eq!(config.log.level, "info");
        assert_eq!(config.server_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\nport = 9000\n\n[database]\nkind = \"memory\"\n\n[log]\nlevel = \"debug\""
        )
        .unwrap();

        let config = AppConfig::load_from(File::from(path.as_path())).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.database.kind, DatabaseKind::Memory);
        assert_eq!(config.log.level, "debug");
    }
}
