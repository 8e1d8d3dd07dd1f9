use serde::{Deserialize, Serialize};

const NAME_UNDEFINED: &str = "Game name must be defined.";
const NAME_BLANK: &str = "Game name cannot be empty.";
const IS_ACTIVE_UNDEFINED: &str = "Game isActive field must be defined.";

/// Body of a create call. Fields are optional on the wire so that missing
/// values surface as validation messages rather than decode failures.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

/// Body of an update call. `new_name` requests a rename.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGameRequest {
    pub name: Option<String>,
    pub new_name: Option<String>,
    pub is_active: Option<bool>,
}

/// A structurally valid create command.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGame {
    pub name: String,
    pub is_active: bool,
}

/// A structurally valid update command against the record currently named `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct GameUpdate {
    pub name: String,
    pub rename_to: Option<String>,
    pub is_active: bool,
}

impl CreateGameRequest {
    pub fn validate(self) -> Result<NewGame, String> {
        let mut problems = Vec::new();
        check_name(self.name.as_deref(), &mut problems);
        if self.is_active.is_none() {
            problems.push(IS_ACTIVE_UNDEFINED);
        }

        match (self.name, self.is_active) {
            (Some(name), Some(is_active)) if problems.is_empty() => Ok(NewGame { name, is_active }),
            _ => Err(problems.join(", ")),
        }
    }
}

impl UpdateGameRequest {
    pub fn validate(self) -> Result<GameUpdate, String> {
        let mut problems = Vec::new();
        check_name(self.name.as_deref(), &mut problems);
        if self.is_active.is_none() {
            problems.push(IS_ACTIVE_UNDEFINED);
        }

        match (self.name, self.is_active) {
            (Some(name), Some(is_active)) if problems.is_empty() => Ok(GameUpdate {
                name,
                rename_to: self.new_name,
                is_active,
            }),
            _ => Err(problems.join(", ")),
        }
    }
}

fn check_name(name: Option<&str>, problems: &mut Vec<&'static str>) {
    match name {
        None => problems.push(NAME_UNDEFINED),
        Some(name) if name.trim().is_empty() => problems.push(NAME_BLANK),
        Some(_) => {}
    }
}
