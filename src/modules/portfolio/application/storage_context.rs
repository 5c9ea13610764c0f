use std::sync::Arc;
use tracing::info;

use crate::portfolio::application::{
    portfolio_use_cases::PortfolioUseCases,
    ports::outgoing::{PortfolioStorage, PortfolioStorageError},
    services::{GetPortfolioService, SubmitContactService},
};

/// Owns the storage backend chosen at startup.
///
/// Built once by the hosting process: `initialize` seeds the backend, then
/// the context hands out the use cases that request handlers receive.
#[derive(Clone)]
pub struct StorageContext {
    storage: Arc<dyn PortfolioStorage>,
}

impl StorageContext {
    pub async fn initialize(
        storage: Arc<dyn PortfolioStorage>,
    ) -> Result<Self, PortfolioStorageError> {
        storage.seed_data().await?;
        info!("Portfolio storage initialized");

        Ok(Self { storage })
    }

    pub fn storage(&self) -> Arc<dyn PortfolioStorage> {
        Arc::clone(&self.storage)
    }

    pub fn use_cases(&self) -> PortfolioUseCases {
        PortfolioUseCases {
            get_portfolio: Arc::new(GetPortfolioService::new(self.storage())),
            submit_contact: Arc::new(SubmitContactService::new(self.storage())),
        }
    }
}
