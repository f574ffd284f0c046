//! Chirpy entry-point: loads settings, migrates the schema, and serves HTTP
//! until interrupted.

mod server;

use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use chirpy::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use server::{AppSettings, ServerConfig, create_server, run_until_interrupt};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
    info!(state = "starting", "server lifecycle");

    let settings =
        AppSettings::load().map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let db_url = settings.db_url()?;
    let platform = settings.platform()?;

    run_migrations(db_url)
        .await
        .wrap_err("failed to apply database migrations")?;
    let pool = DbPool::new(PoolConfig::new(db_url))
        .await
        .wrap_err("failed to connect to the database")?;

    let config = ServerConfig::new(settings.bind_addr(), platform, pool)
        .with_app_root(settings.app_root())
        .with_assets_root(settings.assets_root());
    let server = create_server(config).wrap_err("failed to start HTTP server")?;

    run_until_interrupt(server, tokio::signal::ctrl_c())
        .await
        .wrap_err("server shutdown failed")?;
    Ok(())
}
