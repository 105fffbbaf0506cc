pub mod error;
pub mod routes;
pub mod state;
pub mod views;
mod ws;

use axum::Router;

pub use error::ApiError;
pub use state::{AppState, GameEvent};
pub use views::BrandNames;

pub fn module_ready() -> bool {
    true
}

pub fn app(state: AppState) -> Router {
    routes::router(state)
}
