use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json,
    Router,
};

use crate::{
    error::ApiError,
    state::AppState,
    views::{
        GameSnapshot, HistoryResponse, PayoffMatrixResponse, PlayResponse, ResetRequest,
        SelectStrategyRequest,
    },
    ws,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/styles.css", get(styles))
        .route("/static/app.js", get(script))
        .route("/api/game", get(game_snapshot))
        .route("/api/game/select", post(select_strategy))
        .route("/api/game/play", post(play_round))
        .route("/api/game/next-round", post(next_round))
        .route("/api/game/reset", post(reset_game))
        .route("/api/payoffs", get(payoff_matrix))
        .route("/api/history", get(history))
        .route("/api/history.csv", get(history_csv))
        .route("/ws/events", get(ws::events_socket))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(ui::index_html())
}

async fn styles() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], ui::styles_css())
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        ui::app_js(),
    )
}

async fn game_snapshot(State(state): State<AppState>) -> Result<Json<GameSnapshot>, ApiError> {
    state.snapshot().map(Json)
}

async fn select_strategy(
    State(state): State<AppState>,
    Json(request): Json<SelectStrategyRequest>,
) -> Result<Json<GameSnapshot>, ApiError> {
    state
        .select_strategy(request.brand, request.strategy)
        .map(Json)
}

async fn play_round(State(state): State<AppState>) -> Result<Json<PlayResponse>, ApiError> {
    state.play().map(Json)
}

async fn next_round(State(state): State<AppState>) -> Result<Json<GameSnapshot>, ApiError> {
    state.advance_round().map(Json)
}

async fn reset_game(
    State(state): State<AppState>,
    Json(request): Json<ResetRequest>,
) -> Result<Json<GameSnapshot>, ApiError> {
    state.reset(request.confirm).map(Json)
}

async fn payoff_matrix(
    State(state): State<AppState>,
) -> Result<Json<PayoffMatrixResponse>, ApiError> {
    state.payoff_matrix().map(Json)
}

async fn history(State(state): State<AppState>) -> Result<Json<HistoryResponse>, ApiError> {
    state.history().map(Json)
}

async fn history_csv(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let csv = state.history_csv()?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"historique.csv\"",
            ),
        ],
        csv,
    ))
}
