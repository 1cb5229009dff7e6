use axum::{
    extract::{Path, State},
    routing::{post, put},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::ValidatedJson;
use crate::models::SeatAction;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/lock", post(lock_seat))
        .route("/confirm", post(confirm_seat))
        .route("/unlock/{seat_id}", put(unlock_seat))
        .route("/cancel", post(cancel_booking))
}

/* ---------- request / response ---------- */

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SeatRequest {
    #[validate(length(min = 1, max = 64, message = "seatId must be between 1 and 64 characters"))]
    pub seat_id: String,
    #[validate(length(min = 1, max = 64, message = "userId must be between 1 and 64 characters"))]
    pub user_id: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UnlockRequest {
    #[validate(length(min = 1, max = 64, message = "userId must be between 1 and 64 characters"))]
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub status: &'static str,
    pub data: SeatAction,
}

impl From<SeatAction> for ActionResponse {
    fn from(data: SeatAction) -> Self {
        Self { status: "success", data }
    }
}

/* ---------- handlers ---------- */

// POST /api/lock
async fn lock_seat(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<SeatRequest>,
) -> AppResult<Json<ActionResponse>> {
    let action = state.registry()?.lock(&req.seat_id, &req.user_id, Utc::now())?;
    Ok(Json(action.into()))
}

// POST /api/confirm
async fn confirm_seat(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<SeatRequest>,
) -> AppResult<Json<ActionResponse>> {
    let action = state.registry()?.confirm(&req.seat_id, &req.user_id, Utc::now())?;
    Ok(Json(action.into()))
}

// PUT /api/unlock/{seat_id}
async fn unlock_seat(
    State(state): State<Arc<AppState>>,
    Path(seat_id): Path<String>,
    ValidatedJson(req): ValidatedJson<UnlockRequest>,
) -> AppResult<Json<ActionResponse>> {
    let action = state.registry()?.unlock(&seat_id, &req.user_id, Utc::now())?;
    Ok(Json(action.into()))
}

// POST /api/cancel
async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<SeatRequest>,
) -> AppResult<Json<ActionResponse>> {
    let action = state.registry()?.cancel(&req.seat_id, &req.user_id, Utc::now())?;
    Ok(Json(action.into()))
}
