use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub games: usize,
}

/// Liveness probe; also reports how many records the store currently holds.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "Healthy!",
        games: state.game_service.count_games(),
    })
}
