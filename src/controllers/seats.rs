use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use std::sync::Arc;

use crate::error::AppResult;
use crate::models::{Seat, SeatTable};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/seats", get(get_seats))
        .route("/status/{seat_id}", get(get_seat_status))
}

// GET /api/seats
async fn get_seats(State(state): State<Arc<AppState>>) -> AppResult<Json<SeatTable>> {
    let table = state.registry()?.seats(Utc::now());
    Ok(Json(table))
}

// GET /api/status/{seat_id}
async fn get_seat_status(
    State(state): State<Arc<AppState>>,
    Path(seat_id): Path<String>,
) -> AppResult<Json<Seat>> {
    let seat = state.registry()?.seat(&seat_id, Utc::now())?;
    Ok(Json(seat))
}
