use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    portfolio::application::ports::incoming::use_cases::{GetPortfolioError, PortfolioView},
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Get the full portfolio
///
/// Returns projects, skills, experience and education together with the
/// owner's profile.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (status = 200, description = "Portfolio content", body = PortfolioView),
        (status = 500, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get_portfolio.execute().await {
        Ok(view) => ApiResponse::success(view),
        Err(err) => map_get_portfolio_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_get_portfolio_error(err: GetPortfolioError) -> actix_web::HttpResponse {
    match err {
        GetPortfolioError::QueryFailed(msg) => {
            error!("Failed to load portfolio: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
