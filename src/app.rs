use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/predict/value", post(handlers::submit_value))
        .route(
            "/predict/file",
            post(handlers::submit_file).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/download/:token", get(handlers::download))
        .with_state(state)
}
