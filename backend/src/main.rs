//! Backend entry-point: loads settings, picks storage and serves the REST API.

mod server;

use actix_web::web;
use color_eyre::eyre::Result;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use boardgames::inbound::http::health::HealthState;
use boardgames::settings::ServerSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
    color_eyre::install()?;

    let settings = ServerSettings::load_from_iter(std::env::args_os())?;
    let config = ServerConfig::from_settings(&settings).await?;
    let bind_addr = config.bind_addr;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "board game server listening");

    server.await?;
    health_state.mark_unhealthy();
    Ok(())
}
