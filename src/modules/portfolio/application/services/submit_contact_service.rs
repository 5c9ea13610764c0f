use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::portfolio::application::{
    domain::Message,
    ports::incoming::use_cases::{ContactMessageCommand, SubmitContactError, SubmitContactUseCase},
    ports::outgoing::PortfolioStorage,
};

#[derive(Clone)]
pub struct SubmitContactService {
    storage: Arc<dyn PortfolioStorage>,
}

impl SubmitContactService {
    pub fn new(storage: Arc<dyn PortfolioStorage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl SubmitContactUseCase for SubmitContactService {
    async fn execute(&self, command: ContactMessageCommand) -> Result<Message, SubmitContactError> {
        let stored = self
            .storage
            .create_message(command.into_new_message())
            .await
            .map_err(|e| SubmitContactError::StorageError(e.to_string()))?;

        info!(message_id = stored.id, "Contact message stored");
        Ok(stored)
    }
}
