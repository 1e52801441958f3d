use axum::{extract::State, response::Response, routing::get, Router};
use chrono::Local;
use std::sync::Arc;

use crate::{
    fleet::classify::format_clock,
    logger::{self, LogTag},
    webserver::{models::responses::FleetResponse, state::AppState, utils::success_response},
};

/// Create fleet view routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/fleet", get(fleet_view))
}

/// GET /api/fleet
///
/// Never blocks on a refresh cycle: returns whatever the slot holds right now.
async fn fleet_view(State(state): State<Arc<AppState>>) -> Response {
    let published = state.slot.latest();
    let response = FleetResponse::from_published(published.as_deref(), format_clock(&Local::now()));

    if logger::is_debug_enabled(LogTag::Webserver) {
        logger::debug(
            LogTag::Webserver,
            &format!(
                "Serving fleet view (cycle={:?}, cards={}, rows={})",
                response.cycle,
                response.fleet_cards.len(),
                response.latency_rows.len()
            ),
        );
    }

    success_response(response)
}
