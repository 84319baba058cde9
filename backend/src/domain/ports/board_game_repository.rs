//! Port for board game persistence.
//!
//! Insert failures are discriminated: a duplicate name is
//! [`BoardGameRepositoryError::NameConflict`], distinct from storage faults.

use async_trait::async_trait;

use crate::domain::{BoardGame, BoardGameId, NewBoardGame};

use super::define_port_error;

define_port_error! {
    /// Errors raised by board game repository adapters.
    pub enum BoardGameRepositoryError {
        /// Another board game already uses this name.
        NameConflict { name: String } =>
            "board game name already exists: {name}",
        /// Repository connection could not be established.
        Connection { message: String } =>
            "board game repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "board game repository query failed: {message}",
    }
}

/// Storage-facing operations over the board game catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardGameRepository: Send + Sync {
    /// Every persisted board game, ordered by identifier.
    async fn list_all(&self) -> Result<Vec<BoardGame>, BoardGameRepositoryError>;

    /// The board game with `id`, or `None` when no record has it.
    async fn find_by_id(
        &self,
        id: BoardGameId,
    ) -> Result<Option<BoardGame>, BoardGameRepositoryError>;

    /// Persist a new board game and return its assigned identifier.
    async fn insert(&self, game: &NewBoardGame) -> Result<BoardGameId, BoardGameRepositoryError>;
}
