//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories are thin translators between Diesel rows (`models`) and
//! domain types; row structs and the `schema` module stay private. Database
//! failures are mapped into the port's typed error variants.
//!
//! # Example
//!
//! ```ignore
//! use boardgames::outbound::persistence::{DbPool, DieselBoardGameRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/boardgames")).await?;
//! let repo = DieselBoardGameRepository::new(pool);
//! ```

mod diesel_board_game_repository;
mod models;
mod pool;
mod schema;

pub use diesel_board_game_repository::DieselBoardGameRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
