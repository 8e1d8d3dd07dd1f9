use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod requests;

pub use requests::{CreateGameRequest, GameUpdate, NewGame, UpdateGameRequest};

/// A game record, keyed in the store by its current `name`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub name: String,
    pub creation_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl Game {
    pub fn new(name: String, is_active: bool, creation_date: DateTime<Utc>) -> Self {
        Game {
            name,
            creation_date,
            update_date: None,
            is_active,
        }
    }
}
