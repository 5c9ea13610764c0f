use crate::api::schemas::{ErrorResponse, ReadinessResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::portfolio::adapter::incoming::web::routes::ContactRequest;
use crate::portfolio::application::domain::{
    Education, Experience, Message, Profile, Project, Skill,
};
use crate::portfolio::application::ports::incoming::use_cases::PortfolioView;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public API behind the personal portfolio site",
        contact(
            name = "Ajai Sekar",
            email = "ajaiofficial06@gmail.com"
        )
    ),
    paths(
        // Portfolio endpoints
        crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
        crate::portfolio::adapter::incoming::web::routes::submit_contact_handler,

        // Probes
        crate::health::health,
        crate::health::readiness,
    ),
    components(
        schemas(
            // Response bodies
            SuccessResponse,
            ErrorResponse,
            ReadinessResponse,

            // Portfolio DTOs
            PortfolioView,
            Project,
            Skill,
            Experience,
            Education,
            Profile,
            Message,
            ContactRequest,
        )
    ),
    tags(
        (name = "portfolio", description = "Portfolio content and contact form"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;
