use std::sync::Arc;

use crate::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioUseCase, SubmitContactUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get_portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
}
