use std::sync::Arc;

use shared::repositories::game_store::GameStore;
use shared::services::game_service::GameService;

#[derive(Clone)]
pub struct AppState {
    pub game_service: Arc<GameService>,
}

impl AppState {
    pub fn new(store: Arc<GameStore>) -> Self {
        AppState {
            game_service: Arc::new(GameService::new(store)),
        }
    }
}
