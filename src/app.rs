use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/ask-ai",
            post(handlers::ask_ai).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/calculate-calories",
            post(handlers::calculate_calories).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/ollama",
            post(handlers::raw_generate).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/workout-history",
            get(handlers::workout_history)
                .head(handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
