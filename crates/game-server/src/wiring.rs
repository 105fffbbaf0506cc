use api::{AppState, BrandNames};
use axum::{routing::get, Router};
use core_game::PayoffGame;

pub fn build_app(game: PayoffGame, brand_names: BrandNames) -> Router {
    debug_assert!(core_game::module_ready());
    debug_assert!(runtime::module_ready());
    debug_assert!(api::module_ready());
    debug_assert!(ui::module_ready());

    api::app(AppState::new(game, brand_names)).route("/health", get(healthcheck))
}

async fn healthcheck() -> &'static str {
    "ok"
}
