pub mod config;
pub mod models;
pub mod controllers;
pub mod middleware;
pub mod services;
pub mod error;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use std::sync::{Arc, Mutex, MutexGuard};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use error::{AppError, AppResult};
use services::SeatRegistry;

// Shared state для всего приложения
pub struct AppState {
    registry: Mutex<SeatRegistry>,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        Arc::new(Self {
            registry: Mutex::new(SeatRegistry::new()),
            config,
        })
    }

    /// Exclusive access to the seat table for one registry operation.
    ///
    /// Handlers must not hold the guard across an `.await`.
    pub fn registry(&self) -> AppResult<MutexGuard<'_, SeatRegistry>> {
        self.registry
            .lock()
            .map_err(|_| AppError::Internal("seat registry lock poisoned".to_string()))
    }
}

/// Builds the full router: homepage, liveness probe and the `/api` routes.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { Html(include_str!("../static/index.html")) }))
        .route("/ping", get(|| async { "pong" }))
        .nest("/api", controllers::routes())
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(serde_json::json!({ "error": "Not found" })))
}
