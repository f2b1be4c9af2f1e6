//! Sensor state handler.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use super::super::types::StatusState;

/// Current sensor state and attributes as JSON
pub async fn state_handler(State(state): State<StatusState>) -> Response {
    let sensor = state.sensor.read().await;
    Json(sensor.snapshot()).into_response()
}
