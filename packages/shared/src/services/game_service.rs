use std::sync::Arc;

use tracing::{error, info, warn};

use crate::models::game::{Game, GameUpdate, NewGame};
use crate::repositories::game_store::{EntryUpdate, GameStore};
use crate::services::clock::{Clock, SystemClock};
use crate::services::errors::game_service_errors::GameServiceError;

pub struct GameService {
    store: Arc<GameStore>,
    clock: Arc<dyn Clock>,
}

impl GameService {
    pub fn new(store: Arc<GameStore>) -> Self {
        GameService {
            store,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(store: Arc<GameStore>, clock: Arc<dyn Clock>) -> Self {
        GameService { store, clock }
    }

    pub fn create_game(&self, new_game: NewGame) -> Result<Game, GameServiceError> {
        // Request validation already rejects this; the store must never hold an empty key.
        if new_game.name.is_empty() {
            return Err(GameServiceError::ValidationError(
                "Game name cannot be null or empty.".to_string(),
            ));
        }

        let game = Game::new(new_game.name, new_game.is_active, self.clock.now());
        if !self.store.insert_if_absent(game.clone()) {
            warn!("Game with name: {} already exists.", game.name);
            return Err(GameServiceError::AlreadyExists(game.name));
        }

        info!("Created game: {:?}", game);
        Ok(game)
    }

    pub fn get_game(&self, name: &str) -> Result<Game, GameServiceError> {
        let game = self.store.get(name).map_err(|e| self.not_found(e.into()))?;
        info!("Retrieved game: {:?}", game);
        Ok(game)
    }

    pub fn get_all_games(&self) -> Vec<Game> {
        let games = self.store.list_all();
        info!("Retrieved {} games", games.len());
        games
    }

    pub fn count_games(&self) -> usize {
        self.store.len()
    }

    /// Applies a status change and/or rename to the record named `update.name`
    /// in one atomic step. An update that changes nothing returns the stored
    /// record untouched, without bumping `update_date`.
    pub fn update_game(&self, update: GameUpdate) -> Result<Game, GameServiceError> {
        let result = self.store.compute(&update.name, |game| {
            let rename_to = update
                .rename_to
                .as_deref()
                .filter(|new_name| *new_name != game.name);

            if game.is_active == update.is_active && rename_to.is_none() {
                info!(
                    "Nothing to update. Game with the same data already exists: {:?}",
                    game
                );
                return Ok(EntryUpdate::Keep);
            }

            if rename_to == Some("") {
                return Err(GameServiceError::ValidationError(
                    "New game name cannot be null or empty.".to_string(),
                ));
            }

            game.is_active = update.is_active;
            game.update_date = Some(self.clock.now());

            Ok(match rename_to {
                Some(new_name) => EntryUpdate::MoveTo(new_name.to_string()),
                None => EntryUpdate::Replace,
            })
        });

        match result {
            Ok(game) => {
                info!("Updated game: {:?}", game);
                Ok(game)
            }
            Err(e @ GameServiceError::NotFound(_)) => Err(self.not_found(e)),
            Err(e) => {
                warn!("Failed to update game {}: {}", update.name, e);
                Err(e)
            }
        }
    }

    pub fn delete_game(&self, name: &str) -> Result<Game, GameServiceError> {
        let game = self.store.remove(name).map_err(|e| self.not_found(e.into()))?;
        info!("Deleted game: {:?}", game);
        Ok(game)
    }

    fn not_found(&self, err: GameServiceError) -> GameServiceError {
        error!("{}", err);
        err
    }
}
