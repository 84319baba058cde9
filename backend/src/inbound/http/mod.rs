//! HTTP inbound adapter exposing REST endpoints.

pub mod board_games;
pub mod error;
pub mod health;
pub mod state;

pub use error::ApiResult;
