use crate::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioUseCase, SubmitContactUseCase,
};
use crate::portfolio::application::ports::outgoing::PortfolioStorage;
use crate::portfolio::application::services::{GetPortfolioService, SubmitContactService};
use crate::portfolio::application::storage_context::StorageContext;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Builds `AppState` for route tests.
///
/// By default the real services run over an empty `StubPortfolioStorage`.
/// `with_storage` swaps the backend; `with_get_portfolio` and
/// `with_submit_contact` replace a use case outright.
pub struct TestAppStateBuilder {
    storage: Arc<dyn PortfolioStorage>,
    get_portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::over(Arc::new(StubPortfolioStorage::default()))
    }
}

impl TestAppStateBuilder {
    fn over(storage: Arc<dyn PortfolioStorage>) -> Self {
        Self {
            get_portfolio: Arc::new(GetPortfolioService::new(Arc::clone(&storage))),
            submit_contact: Arc::new(SubmitContactService::new(Arc::clone(&storage))),
            storage,
        }
    }

    pub fn with_storage(self, storage: Arc<dyn PortfolioStorage>) -> Self {
        Self::over(storage)
    }

    /// Runs the startup lifecycle (seeding) against `storage` first.
    pub async fn with_seeded_storage(self, storage: Arc<dyn PortfolioStorage>) -> Self {
        let context = StorageContext::initialize(storage)
            .await
            .expect("seeding test storage");
        let use_cases = context.use_cases();

        Self {
            storage: context.storage(),
            get_portfolio: use_cases.get_portfolio,
            submit_contact: use_cases.submit_contact,
        }
    }

    pub fn with_get_portfolio(
        mut self,
        uc: impl GetPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_portfolio = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_contact = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: PortfolioUseCases {
                get_portfolio: self.get_portfolio,
                submit_contact: self.submit_contact,
            },
            storage: self.storage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn default_builder_serves_empty_portfolio() {
        let state = TestAppStateBuilder::default()
            .with_submit_contact(StubSubmitContactUseCase::success())
            .build();

        let view = state.portfolio.get_portfolio.execute().await.unwrap();
        assert!(view.projects.is_empty());
    }

    #[actix_web::test]
    async fn stub_use_case_overrides_service() {
        let state = TestAppStateBuilder::default()
            .with_get_portfolio(StubGetPortfolioUseCase::empty())
            .build();

        let view = state.portfolio.get_portfolio.execute().await.unwrap();
        assert_eq!(view.profile.name, "Ajai Sekar");
    }
}
