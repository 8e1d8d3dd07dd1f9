use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::models::game::Game;
use crate::repositories::errors::game_store_errors::GameStoreError;

/// What `GameStore::compute` should do with the working copy once the update
/// function returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryUpdate {
    /// Discard the working copy; the stored record stays as it was.
    Keep,
    /// Write the working copy back under the same key.
    Replace,
    /// Write the working copy under a new key and release the old one.
    MoveTo(String),
}

/// Process-wide, in-memory game records keyed by name.
///
/// Every write takes the map exclusively, so a compound operation such as a
/// rename (collision check, remove, insert) is a single atomic step and
/// readers never observe a record under both keys or under neither.
#[derive(Debug, Default)]
pub struct GameStore {
    games: RwLock<HashMap<String, Game>>,
}

impl GameStore {
    pub fn new() -> Self {
        GameStore::default()
    }

    /// Stores `game` under its name unless that key is taken. Returns whether
    /// the insert happened.
    pub fn insert_if_absent(&self, game: Game) -> bool {
        let mut games = self.games.write();
        if games.contains_key(&game.name) {
            return false;
        }
        games.insert(game.name.clone(), game);
        true
    }

    pub fn get(&self, name: &str) -> Result<Game, GameStoreError> {
        self.games
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| GameStoreError::NotFound(name.to_string()))
    }

    /// Snapshot of every record at call time, in no particular order.
    pub fn list_all(&self) -> Vec<Game> {
        self.games.read().values().cloned().collect()
    }

    /// Runs `update` against a working copy of the record stored under `name`
    /// while holding the store exclusively, then commits according to the
    /// returned [`EntryUpdate`]. Nothing is written if `update` fails or the
    /// move target is already taken.
    pub fn compute<F, E>(&self, name: &str, update: F) -> Result<Game, E>
    where
        F: FnOnce(&mut Game) -> Result<EntryUpdate, E>,
        E: From<GameStoreError>,
    {
        let mut games = self.games.write();
        let original = games
            .get(name)
            .cloned()
            .ok_or_else(|| GameStoreError::NotFound(name.to_string()))?;

        let mut working = original.clone();
        match update(&mut working)? {
            EntryUpdate::Keep => Ok(original),
            EntryUpdate::MoveTo(new_name) if new_name != name => {
                if games.contains_key(&new_name) {
                    return Err(GameStoreError::AlreadyExists(new_name).into());
                }
                games.remove(name);
                working.name = new_name.clone();
                games.insert(new_name, working.clone());
                debug!("Moved game from key {} to key {}", name, working.name);
                Ok(working)
            }
            EntryUpdate::Replace | EntryUpdate::MoveTo(_) => {
                working.name = name.to_string();
                games.insert(name.to_string(), working.clone());
                Ok(working)
            }
        }
    }

    pub fn remove(&self, name: &str) -> Result<Game, GameStoreError> {
        self.games
            .write()
            .remove(name)
            .ok_or_else(|| GameStoreError::NotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.games.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn game(name: &str, is_active: bool) -> Game {
        Game::new(name.to_string(), is_active, Utc::now())
    }

    #[test]
    fn test_insert_if_absent_only_inserts_once() {
        let store = GameStore::new();

        assert!(store.insert_if_absent(game("Chess", true)));
        assert!(!store.insert_if_absent(game("Chess", false)));

        let stored = store.get("Chess").unwrap();
        assert!(stored.is_active);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_missing_key() {
        let store = GameStore::new();

        assert_eq!(
            store.get("Missing").unwrap_err(),
            GameStoreError::NotFound("Missing".to_string())
        );
    }

    #[test]
    fn test_list_all_is_a_snapshot() {
        let store = GameStore::new();
        store.insert_if_absent(game("Chess", true));
        store.insert_if_absent(game("Go", false));

        let snapshot = store.list_all();
        store.remove("Chess").unwrap();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(store.list_all().len(), 1);
    }

    #[test]
    fn test_remove_returns_prior_value() {
        let store = GameStore::new();
        store.insert_if_absent(game("Chess", true));

        let removed = store.remove("Chess").unwrap();
        assert_eq!(removed.name, "Chess");
        assert!(store.is_empty());
        assert_eq!(
            store.remove("Chess").unwrap_err(),
            GameStoreError::NotFound("Chess".to_string())
        );
    }

    #[test]
    fn test_compute_missing_key_does_not_call_update() {
        let store = GameStore::new();
        let calls = AtomicUsize::new(0);

        let result: Result<Game, GameStoreError> = store.compute("Missing", |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(EntryUpdate::Replace)
        });

        assert_eq!(
            result.unwrap_err(),
            GameStoreError::NotFound("Missing".to_string())
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_compute_keep_discards_working_copy() {
        let store = GameStore::new();
        store.insert_if_absent(game("Chess", true));

        let result: Game = store
            .compute("Chess", |working| {
                working.is_active = false;
                Ok::<_, GameStoreError>(EntryUpdate::Keep)
            })
            .unwrap();

        assert!(result.is_active);
        assert!(store.get("Chess").unwrap().is_active);
    }

    #[test]
    fn test_compute_replace_writes_in_place() {
        let store = GameStore::new();
        store.insert_if_absent(game("Chess", true));

        let result = store
            .compute("Chess", |working| {
                working.is_active = false;
                Ok::<_, GameStoreError>(EntryUpdate::Replace)
            })
            .unwrap();

        assert!(!result.is_active);
        assert!(!store.get("Chess").unwrap().is_active);
    }

    #[test]
    fn test_compute_error_leaves_record_intact() {
        let store = GameStore::new();
        store.insert_if_absent(game("Chess", true));

        let result: Result<Game, GameStoreError> = store.compute("Chess", |working| {
            working.is_active = false;
            Err(GameStoreError::AlreadyExists("anything".to_string()))
        });

        assert!(result.is_err());
        assert!(store.get("Chess").unwrap().is_active);
    }

    #[test]
    fn test_compute_move_migrates_key() {
        let store = GameStore::new();
        store.insert_if_absent(game("Chess", true));

        let moved = store
            .compute("Chess", |_| {
                Ok::<_, GameStoreError>(EntryUpdate::MoveTo("Shogi".to_string()))
            })
            .unwrap();

        assert_eq!(moved.name, "Shogi");
        assert!(store.get("Chess").is_err());
        assert_eq!(store.get("Shogi").unwrap().name, "Shogi");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_compute_move_onto_taken_key_fails() {
        let store = GameStore::new();
        store.insert_if_absent(game("Chess", true));
        store.insert_if_absent(game("Go", false));

        let result: Result<Game, GameStoreError> = store.compute("Chess", |working| {
            working.is_active = false;
            Ok(EntryUpdate::MoveTo("Go".to_string()))
        });

        assert_eq!(
            result.unwrap_err(),
            GameStoreError::AlreadyExists("Go".to_string())
        );
        assert!(store.get("Chess").unwrap().is_active);
        assert!(!store.get("Go").unwrap().is_active);
    }

    #[test]
    fn test_concurrent_inserts_admit_one_winner() {
        let store = GameStore::new();
        let winners = AtomicUsize::new(0);

        std::thread::scope(|scope| {
            for _ in 0..16 {
                scope.spawn(|| {
                    if store.insert_if_absent(game("Chess", true)) {
                        winners.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
        });

        assert_eq!(winners.load(Ordering::SeqCst), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_concurrent_moves_to_same_key_admit_one_winner() {
        let store = GameStore::new();
        for i in 0..8 {
            store.insert_if_absent(game(&format!("Source{}", i), true));
        }
        let winners = AtomicUsize::new(0);

        std::thread::scope(|scope| {
            for i in 0..8 {
                let store = &store;
                let winners = &winners;
                scope.spawn(move || {
                    let result: Result<Game, GameStoreError> =
                        store.compute(&format!("Source{}", i), |_| {
                            Ok(EntryUpdate::MoveTo("Target".to_string()))
                        });
                    if result.is_ok() {
                        winners.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
        });

        assert_eq!(winners.load(Ordering::SeqCst), 1);
        assert_eq!(store.len(), 8);
        assert!(store.get("Target").is_ok());
    }
}
