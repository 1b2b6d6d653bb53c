use axum::{Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use fridgely_core::domain::health::ports::HealthCheckService;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub latency_ms: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub database: bool,
    pub latency_ms: Option<u64>,
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{root_path}/health"), get(health))
        .route(&format!("{root_path}/health/ready"), get(readiness))
}

/// Liveness probe. Fails only when the database round trip does.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.service.health().await {
        Ok(latency_ms) => (
            StatusCode::OK,
            axum::Json(HealthResponse {
                status: "ok".to_string(),
                latency_ms,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                axum::Json(HealthResponse {
                    status: "unavailable".to_string(),
                    latency_ms: 0,
                }),
            )
                .into_response()
        }
    }
}

async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    match state.service.readness().await {
        Ok(status) if status.connected => (
            StatusCode::OK,
            axum::Json(ReadinessResponse {
                database: true,
                latency_ms: Some(status.latency_ms),
            }),
        )
            .into_response(),
        Ok(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            axum::Json(ReadinessResponse {
                database: false,
                latency_ms: None,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                axum::Json(ReadinessResponse {
                    database: false,
                    latency_ms: None,
                }),
            )
                .into_response()
        }
    }
}
