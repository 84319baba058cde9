//! In-process board game store.
//!
//! Used when no database URL is configured, and by tests that exercise the
//! HTTP surface without PostgreSQL. Name uniqueness is checked and the record
//! inserted under one lock, so concurrent creates with the same name yield
//! exactly one success.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{BoardGameRepository, BoardGameRepositoryError};
use crate::domain::{BoardGame, BoardGameId, NewBoardGame};

#[derive(Debug, Default)]
struct Store {
    games: BTreeMap<BoardGameId, BoardGame>,
    last_id: i64,
}

/// `BoardGameRepository` backed by a mutex-guarded ordered map.
///
/// Identifiers start at 1 and are never reused. A rejected insert does not
/// consume an identifier.
///
/// # Examples
/// ```
/// use boardgames::domain::NewBoardGame;
/// use boardgames::domain::ports::BoardGameRepository;
/// use boardgames::outbound::memory::InMemoryBoardGameRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryBoardGameRepository::new();
/// let id = repo.insert(&NewBoardGame::named("Catan")).await.expect("insert");
/// assert_eq!(id.get(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBoardGameRepository {
    store: Mutex<Store>,
}

impl InMemoryBoardGameRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, BoardGameRepositoryError> {
        self.store
            .lock()
            .map_err(|_| BoardGameRepositoryError::query("board game store lock poisoned"))
    }
}

#[async_trait]
impl BoardGameRepository for InMemoryBoardGameRepository {
    async fn list_all(&self) -> Result<Vec<BoardGame>, BoardGameRepositoryError> {
        let store = self.lock()?;
        Ok(store.games.values().cloned().collect())
    }

    async fn find_by_id(
        &self,
        id: BoardGameId,
    ) -> Result<Option<BoardGame>, BoardGameRepositoryError> {
        let store = self.lock()?;
        Ok(store.games.get(&id).cloned())
    }

    async fn insert(&self, game: &NewBoardGame) -> Result<BoardGameId, BoardGameRepositoryError> {
        let mut store = self.lock()?;
        if store.games.values().any(|existing| existing.name == game.name) {
            return Err(BoardGameRepositoryError::name_conflict(game.name.as_str()));
        }
        let next = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| BoardGameRepositoryError::query("board game identifiers exhausted"))?;
        store.last_id = next;
        let id = BoardGameId::new(next);
        store.games.insert(id, game.clone().into_persisted(id));
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repo() -> InMemoryBoardGameRepository {
        InMemoryBoardGameRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn empty_store_lists_nothing(repo: InMemoryBoardGameRepository) {
        let games = repo.list_all().await.expect("list succeeds");
        assert!(games.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn insert_assigns_sequential_ids(repo: InMemoryBoardGameRepository) {
        let first = repo.insert(&NewBoardGame::named("Catan")).await.expect("first");
        let second = repo.insert(&NewBoardGame::named("Azul")).await.expect("second");

        assert_eq!(first, BoardGameId::new(1));
        assert_eq!(second, BoardGameId::new(2));
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_name_is_a_conflict_and_keeps_ids_dense(repo: InMemoryBoardGameRepository) {
        repo.insert(&NewBoardGame::named("Catan")).await.expect("first");

        let err = repo
            .insert(&NewBoardGame::named("Catan"))
            .await
            .expect_err("duplicate rejected");
        assert_eq!(err, BoardGameRepositoryError::name_conflict("Catan"));

        let next = repo.insert(&NewBoardGame::named("Azul")).await.expect("third");
        assert_eq!(next, BoardGameId::new(2));
    }

    #[rstest]
    #[tokio::test]
    async fn find_by_id_round_trips_fields(repo: InMemoryBoardGameRepository) {
        let submitted = NewBoardGame {
            name: "Catan".into(),
            level: Some(2),
            min_players: Some(3),
            max_players: Some("4".into()),
            game_type: Some("Strategy Game".into()),
        };
        let id = repo.insert(&submitted).await.expect("insert");

        let found = repo.find_by_id(id).await.expect("lookup succeeds");
        assert_eq!(found, Some(submitted.into_persisted(id)));
    }

    #[rstest]
    #[tokio::test]
    async fn find_by_unknown_id_is_none(repo: InMemoryBoardGameRepository) {
        let found = repo.find_by_id(BoardGameId::new(42)).await.expect("lookup");
        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn list_is_ordered_by_id(repo: InMemoryBoardGameRepository) {
        for name in ["Catan", "Azul", "Brass"] {
            repo.insert(&NewBoardGame::named(name)).await.expect("insert");
        }
        let ids: Vec<i64> = repo
            .list_all()
            .await
            .expect("list")
            .into_iter()
            .map(|game| game.id.get())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_duplicate_inserts_yield_one_success() {
        let repo = Arc::new(InMemoryBoardGameRepository::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.insert(&NewBoardGame::named("Catan")).await })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.expect("task completes").is_ok() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
        assert_eq!(repo.list_all().await.expect("list").len(), 1);
    }
}
