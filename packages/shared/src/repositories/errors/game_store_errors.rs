#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStoreError {
    NotFound(String),
    AlreadyExists(String),
}

impl std::fmt::Display for GameStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStoreError::NotFound(name) => write!(f, "No game stored under key: {}", name),
            GameStoreError::AlreadyExists(name) => {
                write!(f, "A game is already stored under key: {}", name)
            }
        }
    }
}

impl std::error::Error for GameStoreError {}
