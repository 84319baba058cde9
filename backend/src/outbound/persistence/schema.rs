//! Diesel table definitions.
//!
//! Must match `backend/migrations`. Regenerate with `diesel print-schema`
//! after changing the DDL.

diesel::table! {
    /// Board game catalogue. `name` carries a unique index.
    board_games (id) {
        /// Primary key assigned by a `BIGSERIAL` sequence.
        id -> Int8,
        /// Catalogue-unique name.
        name -> Varchar,
        /// Difficulty level.
        level -> Nullable<Int4>,
        /// Minimum number of players.
        min_players -> Nullable<Int4>,
        /// Maximum number of players, free text.
        max_players -> Nullable<Varchar>,
        /// Category of game.
        game_type -> Nullable<Varchar>,
    }
}
