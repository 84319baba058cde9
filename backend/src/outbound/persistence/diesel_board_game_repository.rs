//! PostgreSQL-backed `BoardGameRepository` using Diesel.
//!
//! The unique index on `board_games.name` is the source of truth for name
//! conflicts; a `UniqueViolation` on insert becomes
//! [`BoardGameRepositoryError::NameConflict`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{BoardGameRepository, BoardGameRepositoryError};
use crate::domain::{BoardGame, BoardGameId, NewBoardGame};

use super::models::{BoardGameRow, NewBoardGameRow};
use super::pool::{DbPool, PoolError};
use super::schema::board_games;

/// Diesel implementation of the board game port.
#[derive(Clone)]
pub struct DieselBoardGameRepository {
    pool: DbPool,
}

impl DieselBoardGameRepository {
    /// Create a repository drawing connections from `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> BoardGameRepositoryError {
    BoardGameRepositoryError::connection(error.message())
}

fn map_diesel_error(error: DieselError) -> BoardGameRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => BoardGameRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => {
            BoardGameRepositoryError::query("database query error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            BoardGameRepositoryError::connection("database connection error")
        }
        _ => BoardGameRepositoryError::query("database error"),
    }
}

fn map_insert_error(error: DieselError, name: &str) -> BoardGameRepositoryError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            BoardGameRepositoryError::name_conflict(name)
        }
        other => map_diesel_error(other),
    }
}

#[async_trait]
impl BoardGameRepository for DieselBoardGameRepository {
    async fn list_all(&self) -> Result<Vec<BoardGame>, BoardGameRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<BoardGameRow> = board_games::table
            .order(board_games::id.asc())
            .select(BoardGameRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(BoardGame::from).collect())
    }

    async fn find_by_id(
        &self,
        id: BoardGameId,
    ) -> Result<Option<BoardGame>, BoardGameRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<BoardGameRow> = board_games::table
            .find(id.get())
            .select(BoardGameRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(BoardGame::from))
    }

    async fn insert(&self, game: &NewBoardGame) -> Result<BoardGameId, BoardGameRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let id: i64 = diesel::insert_into(board_games::table)
            .values(NewBoardGameRow::from(game))
            .returning(board_games::id)
            .get_result(&mut conn)
            .await
            .map_err(|err| map_insert_error(err, &game.name))?;

        Ok(BoardGameId::new(id))
    }
}
