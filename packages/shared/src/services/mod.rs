pub mod clock;
pub mod errors;
pub mod game_service;
