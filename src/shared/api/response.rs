// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

use crate::api::schemas::{ErrorResponse, SuccessResponse};

/// Response builders. Success bodies are written as-is, errors as
/// `{message, field?}`.
pub struct ApiResponse;

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    pub fn accepted_contact() -> HttpResponse {
        Self::created(SuccessResponse { success: true })
    }

    pub fn error(status: StatusCode, message: &str, field: Option<&str>) -> HttpResponse {
        HttpResponse::build(status).json(ErrorResponse {
            message: message.to_string(),
            field: field.map(str::to_string),
        })
    }

    pub fn validation_error(field: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message, Some(field))
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message, None)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            None,
        )
    }
}
