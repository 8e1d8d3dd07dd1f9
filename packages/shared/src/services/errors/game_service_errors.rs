use crate::repositories::errors::game_store_errors::GameStoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameServiceError {
    ValidationError(String),
    NotFound(String),
    AlreadyExists(String),
}

impl std::fmt::Display for GameServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameServiceError::ValidationError(msg) => write!(f, "{}", msg),
            GameServiceError::NotFound(name) => write!(f, "Game with name: {} not found.", name),
            GameServiceError::AlreadyExists(name) => {
                write!(f, "Game with name: {} already exists.", name)
            }
        }
    }
}

impl std::error::Error for GameServiceError {}

impl From<GameStoreError> for GameServiceError {
    fn from(err: GameStoreError) -> Self {
        match err {
            GameStoreError::NotFound(name) => GameServiceError::NotFound(name),
            GameStoreError::AlreadyExists(name) => GameServiceError::AlreadyExists(name),
        }
    }
}
