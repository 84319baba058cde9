//! Domain primitives and ports.
//!
//! Public surface:
//! - [`BoardGame`], [`NewBoardGame`], [`BoardGameId`]: the catalogue entity
//!   before and after storage assigns an identifier.
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failures.
//! - [`TraceId`]: request-scoped correlation identifier.
//! - [`ports`]: the repository trait adapters implement.

pub mod board_game;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::board_game::{BoardGame, BoardGameId, NewBoardGame};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
