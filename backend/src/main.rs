//! Backend entry-point: loads settings, prepares the document store and
//! serves the REST API.

mod server;

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use quizdesk_backend::config::AppSettings;
use quizdesk_backend::inbound::http::health::HealthState;
use quizdesk_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};

async fn connect_store(database_url: &str, settings: &AppSettings) -> std::io::Result<DbPool> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || run_pending_migrations(&url))
        .await
        .map_err(|err| std::io::Error::other(format!("migration task failed: {err}")))?
        .map_err(std::io::Error::other)?;

    let mut pool_config = PoolConfig::new(database_url);
    if let Some(max) = settings.max_connections {
        pool_config = pool_config.with_max_size(max);
    }
    DbPool::new(pool_config).await.map_err(std::io::Error::other)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args: Vec<OsString> = std::env::args_os().collect();
    let settings = AppSettings::load_from_iter(args)
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;

    let mut config = ServerConfig::new(settings.bind_addr());
    if let Some(url) = settings.database_url() {
        config = config.with_db_pool(connect_store(url, &settings).await?);
    }

    info!(addr = %settings.bind_addr(), "starting server");
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_draining();
    result
}
