//! Board game catalogue entries.
//!
//! A board game is created without an identifier ([`NewBoardGame`]) and
//! receives one from storage on insert ([`BoardGame`]). Names are unique
//! across the catalogue; storage enforces this, not these types.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Storage-assigned identifier of a persisted board game.
///
/// Identifiers are never reassigned or reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = i64, example = 1)]
pub struct BoardGameId(i64);

impl BoardGameId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for BoardGameId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for BoardGameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A board game submitted for creation.
///
/// Any `id` supplied by a client is ignored; storage assigns one.
///
/// # Examples
/// ```
/// use boardgames::domain::NewBoardGame;
///
/// let game: NewBoardGame =
///     serde_json::from_str(r#"{"name":"Catan","minPlayers":3}"#).expect("valid JSON");
/// assert_eq!(game.name, "Catan");
/// assert_eq!(game.min_players, Some(3));
/// assert!(game.game_type.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewBoardGame {
    /// Catalogue-unique name.
    #[schema(example = "Catan")]
    pub name: String,
    /// Difficulty level.
    #[serde(default)]
    #[schema(example = 2)]
    pub level: Option<i32>,
    /// Minimum number of players.
    #[serde(default)]
    #[schema(example = 3)]
    pub min_players: Option<i32>,
    /// Maximum number of players, free text such as `"4+"`.
    #[serde(default)]
    #[schema(example = "4")]
    pub max_players: Option<String>,
    /// Category of game.
    #[serde(default)]
    #[schema(example = "Strategy Game")]
    pub game_type: Option<String>,
}

impl NewBoardGame {
    /// Start a submission with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: None,
            min_players: None,
            max_players: None,
            game_type: None,
        }
    }

    /// Attach the identifier storage assigned to this submission.
    #[must_use]
    pub fn into_persisted(self, id: BoardGameId) -> BoardGame {
        let Self {
            name,
            level,
            min_players,
            max_players,
            game_type,
        } = self;
        BoardGame {
            id,
            name,
            level,
            min_players,
            max_players,
            game_type,
        }
    }
}

/// A persisted board game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardGame {
    /// Storage-assigned identifier.
    pub id: BoardGameId,
    /// Catalogue-unique name.
    #[schema(example = "Catan")]
    pub name: String,
    /// Difficulty level.
    #[schema(example = 2)]
    pub level: Option<i32>,
    /// Minimum number of players.
    #[schema(example = 3)]
    pub min_players: Option<i32>,
    /// Maximum number of players.
    #[schema(example = "4")]
    pub max_players: Option<String>,
    /// Category of game.
    #[schema(example = "Strategy Game")]
    pub game_type: Option<String>,
}
