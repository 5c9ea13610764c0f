use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    portfolio::application::ports::incoming::use_cases::{
        ContactMessageCommand, ContactValidationError, SubmitContactError,
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Contact form body. Missing fields are reported by validation, not by
/// the JSON extractor.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[schema(example = "Hello! I'd like to talk about a project.")]
    pub message: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Submit a contact message
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "portfolio",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Message stored", body = SuccessResponse),
        (
            status = 400,
            description = "Validation failed",
            body = ErrorResponse,
            example = json!({ "message": "Invalid email address", "field": "email" })
        ),
        (status = 500, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    data: web::Data<AppState>,
    payload: web::Json<ContactRequest>,
) -> impl Responder {
    let ContactRequest {
        name,
        email,
        message,
    } = payload.into_inner();

    // 1️⃣ Build command (validation happens here)
    let command = match ContactMessageCommand::new(name, email, message) {
        Ok(cmd) => cmd,
        Err(err) => return map_validation_error(err),
    };

    // 2️⃣ Execute use case
    match data.portfolio.submit_contact.execute(command).await {
        Ok(_) => ApiResponse::accepted_contact(),
        Err(err) => map_submit_contact_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_validation_error(err: ContactValidationError) -> actix_web::HttpResponse {
    ApiResponse::validation_error(err.field(), &err.to_string())
}

fn map_submit_contact_error(err: SubmitContactError) -> actix_web::HttpResponse {
    match err {
        SubmitContactError::StorageError(msg) => {
            error!("Failed to store contact message: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    use crate::{
        portfolio::adapter::outgoing::InMemoryPortfolioStorage,
        shared::api::custom_json_config,
        tests::support::{
            app_state_builder::TestAppStateBuilder,
            stubs::{StubPortfolioStorage, StubSubmitContactUseCase},
        },
    };

    // ============================================================
    // Helpers
    // ============================================================

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    fn contact_request(body: serde_json::Value) -> test::TestRequest {
        test::TestRequest::post().uri("/api/contact").set_json(body)
    }

    // ============================================================
    // Tests
    // ============================================================

    #[actix_web::test]
    async fn contact_empty_name_returns_bad_request() {
        // Arrange
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .service(submit_contact_handler),
        )
        .await;

        // Act
        let resp = test::call_service(
            &app,
            contact_request(serde_json::json!({
                "name": "",
                "email": "a@b.com",
                "message": "hi"
            }))
            .to_request(),
        )
        .await;

        // Assert
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["field"], "name");
        assert_eq!(json["message"], "Name is required");
    }

    #[actix_web::test]
    async fn contact_invalid_email_returns_bad_request() {
        // Arrange
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .service(submit_contact_handler),
        )
        .await;

        // Act
        let resp = test::call_service(
            &app,
            contact_request(serde_json::json!({
                "name": "A",
                "email": "not-an-email",
                "message": "hi"
            }))
            .to_request(),
        )
        .await;

        // Assert
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["field"], "email");
        assert_eq!(json["message"], "Invalid email address");
    }

    #[actix_web::test]
    async fn contact_missing_message_returns_bad_request() {
        // Arrange
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .service(submit_contact_handler),
        )
        .await;

        // Act
        let resp = test::call_service(
            &app,
            contact_request(serde_json::json!({
                "name": "A",
                "email": "a@b.com"
            }))
            .to_request(),
        )
        .await;

        // Assert
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["field"], "message");
    }

    #[actix_web::test]
    async fn contact_validation_failure_does_not_write() {
        // Arrange
        let storage = Arc::new(InMemoryPortfolioStorage::new());
        let state = TestAppStateBuilder::default()
            .with_storage(storage.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .service(submit_contact_handler),
        )
        .await;

        // Act
        let resp = test::call_service(
            &app,
            contact_request(serde_json::json!({
                "name": "A",
                "email": "not-an-email",
                "message": "hi"
            }))
            .to_request(),
        )
        .await;

        // Assert
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(storage.messages().await.is_empty());
    }

    #[actix_web::test]
    async fn contact_wrong_json_type_returns_bad_request_without_field() {
        // Arrange
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .service(submit_contact_handler),
        )
        .await;

        // Act
        let resp = test::call_service(
            &app,
            contact_request(serde_json::json!({
                "name": 42,
                "email": "a@b.com",
                "message": "hi"
            }))
            .to_request(),
        )
        .await;

        // Assert
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert!(json.get("field").is_none());
        assert!(json["message"].is_string());
    }

    #[actix_web::test]
    async fn contact_success_stores_one_message() {
        // Arrange
        let storage = Arc::new(InMemoryPortfolioStorage::new());
        let state = TestAppStateBuilder::default()
            .with_storage(storage.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .service(submit_contact_handler),
        )
        .await;

        // Act
        let resp = test::call_service(
            &app,
            contact_request(serde_json::json!({
                "name": "A",
                "email": "a@b.com",
                "message": "hi"
            }))
            .to_request(),
        )
        .await;

        // Assert
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(
            read_json(resp).await,
            serde_json::json!({ "success": true })
        );

        let messages = storage.messages().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].name, "A");
        assert!(!messages[0].created_at.to_rfc3339().is_empty());
    }

    #[actix_web::test]
    async fn contact_repeated_submissions_get_unique_ids() {
        // Arrange
        let storage = Arc::new(InMemoryPortfolioStorage::new());
        let state = TestAppStateBuilder::default()
            .with_storage(storage.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .service(submit_contact_handler),
        )
        .await;

        // Act
        for i in 0..3 {
            let resp = test::call_service(
                &app,
                contact_request(serde_json::json!({
                    "name": format!("Sender {i}"),
                    "email": "a@b.com",
                    "message": "hi"
                }))
                .to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        // Assert
        let ids: Vec<i32> = storage.messages().await.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[actix_web::test]
    async fn contact_storage_failure_returns_internal_error() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_storage(Arc::new(
                StubPortfolioStorage::default().failing_messages("db down"),
            ))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .service(submit_contact_handler),
        )
        .await;

        // Act
        let resp = test::call_service(
            &app,
            contact_request(serde_json::json!({
                "name": "A",
                "email": "a@b.com",
                "message": "hi"
            }))
            .to_request(),
        )
        .await;

        // Assert
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn contact_uses_injected_use_case() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_submit_contact(StubSubmitContactUseCase::failure("queue full"))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .service(submit_contact_handler),
        )
        .await;

        // Act
        let resp = test::call_service(
            &app,
            contact_request(serde_json::json!({
                "name": "A",
                "email": "a@b.com",
                "message": "hi"
            }))
            .to_request(),
        )
        .await;

        // Assert
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = read_json(resp).await;
        assert_eq!(json["message"], "Internal Server Error");
    }
}
