pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::talent::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/talent-match/options",
            get(handlers::handle_get_options),
        )
        .route("/api/v1/talent-match/run", post(handlers::handle_run))
        .route(
            "/api/v1/talent-match/profile",
            post(handlers::handle_draft_profile),
        )
        .with_state(state)
}
