//! Internal Diesel row structs.
//!
//! These never leave the persistence layer; repositories convert them to and
//! from domain types.

use diesel::prelude::*;

use crate::domain::{BoardGame, BoardGameId, NewBoardGame};

use super::schema::board_games;

/// Row read from `board_games`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = board_games)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BoardGameRow {
    pub id: i64,
    pub name: String,
    pub level: Option<i32>,
    pub min_players: Option<i32>,
    pub max_players: Option<String>,
    pub game_type: Option<String>,
}

impl From<BoardGameRow> for BoardGame {
    fn from(row: BoardGameRow) -> Self {
        Self {
            id: BoardGameId::new(row.id),
            name: row.name,
            level: row.level,
            min_players: row.min_players,
            max_players: row.max_players,
            game_type: row.game_type,
        }
    }
}

/// Insertable row; `id` comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = board_games)]
pub(crate) struct NewBoardGameRow<'a> {
    pub name: &'a str,
    pub level: Option<i32>,
    pub min_players: Option<i32>,
    pub max_players: Option<&'a str>,
    pub game_type: Option<&'a str>,
}

impl<'a> From<&'a NewBoardGame> for NewBoardGameRow<'a> {
    fn from(game: &'a NewBoardGame) -> Self {
        Self {
            name: game.name.as_str(),
            level: game.level,
            min_players: game.min_players,
            max_players: game.max_players.as_deref(),
            game_type: game.game_type.as_deref(),
        }
    }
}
