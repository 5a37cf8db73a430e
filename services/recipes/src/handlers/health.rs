use axum::{extract::State, http::StatusCode};
use resepku_core::health::readiness;

use crate::state::AppState;

/// Handler for `GET /readyz`: ready once the store answers a ping.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    readiness("store", state.db.ping().await)
}
