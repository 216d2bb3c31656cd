/// API route modules
pub mod health;
pub mod songs;

use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router with all routes and layers applied
pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/songs", get(songs::list_songs).post(songs::create_song))
        .route(
            "/songs/:id",
            put(songs::update_song).delete(songs::delete_song),
        )
        .route("/songs/:id/text", get(songs::get_song_text))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
