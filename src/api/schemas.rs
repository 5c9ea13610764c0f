// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Body returned when a contact message is accepted
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    #[schema(example = true)]
    pub success: bool,
}

/// Standard error body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "Invalid email address")]
    pub message: String,

    /// Request field that failed validation, when one is known
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "email")]
    pub field: Option<String>,
}

/// Readiness probe body
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadinessResponse {
    #[schema(example = "ok")]
    pub status: &'static str,
    #[schema(example = "ok")]
    pub storage: &'static str,
}
