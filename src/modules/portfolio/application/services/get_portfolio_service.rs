use async_trait::async_trait;
use std::sync::Arc;

use crate::portfolio::application::{
    domain::Profile,
    ports::incoming::use_cases::{GetPortfolioError, GetPortfolioUseCase, PortfolioView},
    ports::outgoing::PortfolioStorage,
};

#[derive(Clone)]
pub struct GetPortfolioService {
    storage: Arc<dyn PortfolioStorage>,
}

impl GetPortfolioService {
    pub fn new(storage: Arc<dyn PortfolioStorage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl GetPortfolioUseCase for GetPortfolioService {
    async fn execute(&self) -> Result<PortfolioView, GetPortfolioError> {
        // The four reads are independent; any failure fails the whole view.
        let (projects, skills, experience, education) = futures::try_join!(
            self.storage.get_projects(),
            self.storage.get_skills(),
            self.storage.get_experience(),
            self.storage.get_education(),
        )
        .map_err(|e| GetPortfolioError::QueryFailed(e.to_string()))?;

        Ok(PortfolioView {
            projects,
            skills,
            experience,
            education,
            profile: Profile::owner(),
        })
    }
}
