pub mod game_store_errors;
