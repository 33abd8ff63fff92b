mod config;
mod error;
mod services;
mod store;
mod views;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use env_logger::Env;
use log::info;

use crate::config::{AppConfig, DatabaseKind};
use crate::error::AppResult;
use crate::services::AppState;
use crate::store::memory::MemoryStore;
use crate::store::sqlite::SqliteStore;
use crate::store::StoreArc;

#[actix_web::main]
async fn main() -> AppResult<()> {
    let config = AppConfig::load()?;
    env_logger::init_from_env(Env::default().default_filter_or(config.log.level.clone()));

    let store: StoreArc = match config.database.kind {
        DatabaseKind::Sqlite => Arc::new(SqliteStore::open(&config.database.path)?),
        DatabaseKind::Memory => {
            info!("Using in-memory catalog, data is lost on exit");
            Arc::new(MemoryStore::new())
        }
    };
    let state = AppState::new(store)?;

    let url = config.server_url();
    if config.server.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url);
        });
    }

    info!("Server running at {}", url);

    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| state.configure(cfg))
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await?;

    Ok(())
}
