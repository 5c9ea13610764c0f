use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::portfolio::application::domain::{Education, Experience, Profile, Project, Skill};

/// Everything the portfolio page renders, in one payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PortfolioView {
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub profile: Profile,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetPortfolioError {
    #[error("Failed to fetch portfolio: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<PortfolioView, GetPortfolioError>;
}
