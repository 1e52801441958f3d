use crate::webserver::{state::AppState, utils::error_response};
use axum::{
    http::{StatusCode, Uri},
    response::Response,
    Router,
};
use std::sync::Arc;

pub mod fleet;
pub mod status;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .fallback(not_found)
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(status::routes())
        .merge(fleet::routes())
}

async fn not_found(uri: Uri) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        "NOT_FOUND",
        &format!("No route for {}", uri.path()),
        None,
    )
}
