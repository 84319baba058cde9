//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the
//! repository port, so tests can swap in the in-memory store or a mock.

use std::sync::Arc;

use crate::domain::ports::BoardGameRepository;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use boardgames::inbound::http::state::HttpState;
/// use boardgames::outbound::memory::InMemoryBoardGameRepository;
///
/// let state = HttpState::new(Arc::new(InMemoryBoardGameRepository::new()));
/// let _repo = state.board_games.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub board_games: Arc<dyn BoardGameRepository>,
}

impl HttpState {
    /// Construct state around a board game repository.
    pub fn new(board_games: Arc<dyn BoardGameRepository>) -> Self {
        Self { board_games }
    }
}
