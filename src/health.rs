use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::warn;

use crate::api::schemas::ReadinessResponse;
use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
/// - No storage access
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Process is alive"))
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Pings the portfolio storage backend
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Storage reachable", body = ReadinessResponse),
        (status = 503, description = "Storage unreachable", body = ReadinessResponse),
    )
)]
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    match data.storage.ping().await {
        Ok(()) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            storage: "ok",
        }),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                storage: "unhealthy",
            })
        }
    }
}
