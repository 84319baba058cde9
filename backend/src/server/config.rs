//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

use boardgames::domain::ports::BoardGameRepository;
use boardgames::outbound::logging::LoggingBoardGameRepository;
use boardgames::outbound::memory::InMemoryBoardGameRepository;
use boardgames::outbound::persistence::{DbPool, DieselBoardGameRepository, PoolConfig};
use boardgames::settings::ServerSettings;

/// Everything the server factory needs to build each worker's app.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) repository: Arc<dyn BoardGameRepository>,
}

impl ServerConfig {
    /// Construct a configuration from an already-built repository.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, repository: Arc<dyn BoardGameRepository>) -> Self {
        Self {
            bind_addr,
            repository,
        }
    }

    /// Resolve settings into a bind address and a storage adapter.
    ///
    /// A configured database URL selects the Diesel adapter, otherwise
    /// records live in memory for the lifetime of the process.
    ///
    /// # Errors
    /// Fails when the bind address does not parse or the pool cannot be built.
    pub async fn from_settings(settings: &ServerSettings) -> Result<Self> {
        let bind_addr = settings.bind_addr()?;
        let repository = match settings.database_url() {
            Some(url) => {
                let pool = DbPool::new(
                    PoolConfig::new(url)
                        .with_max_size(settings.db_max_connections())
                        .with_connection_timeout(settings.db_connection_timeout()),
                )
                .await
                .wrap_err("failed to build database pool")?;
                info!(max_connections = settings.db_max_connections(), "using PostgreSQL storage");
                wrap_logging(DieselBoardGameRepository::new(pool), settings)
            }
            None => {
                info!("no database URL configured; using in-memory storage");
                wrap_logging(InMemoryBoardGameRepository::new(), settings)
            }
        };
        Ok(Self::new(bind_addr, repository))
    }
}

fn wrap_logging<R>(repository: R, settings: &ServerSettings) -> Arc<dyn BoardGameRepository>
where
    R: BoardGameRepository + 'static,
{
    if settings.log_repository_calls() {
        Arc::new(LoggingBoardGameRepository::new(repository))
    } else {
        Arc::new(repository)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn settings(bind_addr: Option<&str>, log_repository_calls: Option<bool>) -> ServerSettings {
        ServerSettings {
            bind_addr: bind_addr.map(str::to_owned),
            database_url: None,
            db_max_connections: None,
            db_connection_timeout_secs: None,
            log_repository_calls,
        }
    }

    #[rstest]
    #[case(None)]
    #[case(Some(false))]
    #[tokio::test]
    async fn settings_without_database_serve_from_memory(#[case] log_repository_calls: Option<bool>) {
        let config = ServerConfig::from_settings(&settings(Some("127.0.0.1:0"), log_repository_calls))
            .await
            .expect("in-memory configuration builds");

        assert_eq!(config.bind_addr.port(), 0);
        let id = config
            .repository
            .insert(&boardgames::domain::NewBoardGame::named("Catan"))
            .await
            .expect("insert succeeds");
        let games = config.repository.list_all().await.expect("list succeeds");
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id, id);
    }

    #[rstest]
    #[tokio::test]
    async fn invalid_bind_addr_fails_startup() {
        let result = ServerConfig::from_settings(&settings(Some("nowhere"), None)).await;
        assert!(result.is_err());
    }
}
