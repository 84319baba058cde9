//! Logging decorator for board game repositories.
//!
//! Wraps any [`BoardGameRepository`] and records each call as `tracing`
//! events inside a span tagged with the operation and the request trace id.
//! Results pass through unchanged.

use async_trait::async_trait;
use tracing::{Instrument, Span, debug, error, info, info_span, warn};

use crate::domain::ports::{BoardGameRepository, BoardGameRepositoryError};
use crate::domain::{BoardGame, BoardGameId, NewBoardGame, TraceId};

/// Repository decorator emitting structured logs around every call.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use boardgames::domain::ports::BoardGameRepository;
/// use boardgames::outbound::logging::LoggingBoardGameRepository;
/// use boardgames::outbound::memory::InMemoryBoardGameRepository;
///
/// let repo: Arc<dyn BoardGameRepository> =
///     Arc::new(LoggingBoardGameRepository::new(InMemoryBoardGameRepository::new()));
/// ```
#[derive(Debug)]
pub struct LoggingBoardGameRepository<R> {
    inner: R,
}

impl<R> LoggingBoardGameRepository<R> {
    /// Wrap `inner`.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

fn operation_span(operation: &'static str) -> Span {
    match TraceId::current() {
        Some(trace_id) => info_span!("board_game_repository", operation, %trace_id),
        None => info_span!("board_game_repository", operation),
    }
}

fn log_failure(err: &BoardGameRepositoryError) {
    match err {
        BoardGameRepositoryError::NameConflict { name } => {
            warn!(%name, "board game name already exists");
        }
        BoardGameRepositoryError::Connection { .. } | BoardGameRepositoryError::Query { .. } => {
            error!(error = %err, "board game repository call failed");
        }
    }
}

#[async_trait]
impl<R> BoardGameRepository for LoggingBoardGameRepository<R>
where
    R: BoardGameRepository,
{
    async fn list_all(&self) -> Result<Vec<BoardGame>, BoardGameRepositoryError> {
        async {
            info!("retrieving all board games");
            let result = self.inner.list_all().await;
            match &result {
                Ok(games) => debug!(count = games.len(), "retrieved board games"),
                Err(err) => log_failure(err),
            }
            result
        }
        .instrument(operation_span("list_all"))
        .await
    }

    async fn find_by_id(
        &self,
        id: BoardGameId,
    ) -> Result<Option<BoardGame>, BoardGameRepositoryError> {
        async {
            info!(%id, "retrieving board game");
            let result = self.inner.find_by_id(id).await;
            match &result {
                Ok(Some(game)) => debug!(%id, name = %game.name, "board game found"),
                Ok(None) => warn!(%id, "board game not found"),
                Err(err) => log_failure(err),
            }
            result
        }
        .instrument(operation_span("find_by_id"))
        .await
    }

    async fn insert(&self, game: &NewBoardGame) -> Result<BoardGameId, BoardGameRepositoryError> {
        async {
            info!(name = %game.name, "adding board game");
            let result = self.inner.insert(game).await;
            match &result {
                Ok(id) => debug!(%id, name = %game.name, "board game added"),
                Err(err) => log_failure(err),
            }
            result
        }
        .instrument(operation_span("insert"))
        .await
    }
}
