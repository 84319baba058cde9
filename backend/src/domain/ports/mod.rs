//! Domain ports defining the edges of the hexagon.
//!
//! Driven adapters (PostgreSQL, the in-memory store, the logging decorator)
//! implement these traits and map their failures into the typed port errors.

mod macros;
pub(crate) use macros::define_port_error;

mod board_game_repository;

#[cfg(test)]
pub use board_game_repository::MockBoardGameRepository;
pub use board_game_repository::{BoardGameRepository, BoardGameRepositoryError};
