pub mod dto;
pub mod handlers;
pub mod repo;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/food", post(handlers::create_food))
        .route("/food/:id", get(handlers::get_food))
        .route("/foods", get(handlers::list_foods))
}
