use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info};
use shared::models::game::{CreateGameRequest, Game, UpdateGameRequest};

use crate::{error::ApiError, middleware::requester::RequesterIp, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/games",
            post(create_game).get(get_all_games).put(update_game),
        )
        .route("/games/{name}", get(get_game).delete(delete_game))
}

async fn create_game(
    State(state): State<AppState>,
    requester: RequesterIp,
    payload: Result<Json<CreateGameRequest>, JsonRejection>,
) -> Result<Json<Game>, ApiError> {
    let Json(request) = payload?;
    info!("Request from IP {} to create game: {:?}", requester, request);

    let new_game = request.validate().map_err(ApiError::Validation)?;
    state
        .game_service
        .create_game(new_game)
        .map(Json)
        .map_err(|e| {
            error!("Failed to create game: {}", e);
            ApiError::from(e)
        })
}

async fn get_game(
    State(state): State<AppState>,
    requester: RequesterIp,
    Path(name): Path<String>,
) -> Result<Json<Game>, ApiError> {
    info!("Request from IP {} to get game by name: {}", requester, name);

    state.game_service.get_game(&name).map(Json).map_err(|e| {
        error!("Failed to retrieve game {}: {}", name, e);
        ApiError::from(e)
    })
}

async fn get_all_games(
    State(state): State<AppState>,
    requester: RequesterIp,
) -> Json<Vec<Game>> {
    info!("Request from IP {} to get all games", requester);

    Json(state.game_service.get_all_games())
}

async fn update_game(
    State(state): State<AppState>,
    requester: RequesterIp,
    payload: Result<Json<UpdateGameRequest>, JsonRejection>,
) -> Result<Json<Game>, ApiError> {
    let Json(request) = payload?;
    info!("Request from IP {} to update game: {:?}", requester, request);

    let update = request.validate().map_err(ApiError::Validation)?;
    let name = update.name.clone();
    state
        .game_service
        .update_game(update)
        .map(Json)
        .map_err(|e| {
            error!("Failed to update game {}: {}", name, e);
            ApiError::from(e)
        })
}

async fn delete_game(
    State(state): State<AppState>,
    requester: RequesterIp,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    info!("Request from IP {} to delete game by name: {}", requester, name);

    state.game_service.delete_game(&name).map_err(|e| {
        error!("Failed to delete game {}: {}", name, e);
        ApiError::from(e)
    })?;
    Ok(StatusCode::OK)
}
