use async_trait::async_trait;

use crate::portfolio::application::domain::{
    Education, Experience, Message, NewMessage, Project, Skill,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortfolioStorageError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Storage contract shared by the in-memory and relational backends.
///
/// Reads return every row in id order. `create_message` performs no
/// validation; callers validate before writing.
#[async_trait]
pub trait PortfolioStorage: Send + Sync {
    async fn get_projects(&self) -> Result<Vec<Project>, PortfolioStorageError>;

    async fn get_skills(&self) -> Result<Vec<Skill>, PortfolioStorageError>;

    async fn get_experience(&self) -> Result<Vec<Experience>, PortfolioStorageError>;

    async fn get_education(&self) -> Result<Vec<Education>, PortfolioStorageError>;

    async fn create_message(&self, input: NewMessage) -> Result<Message, PortfolioStorageError>;

    /// Inserts the seed catalog unless a project already exists.
    /// Only the projects set is inspected.
    async fn seed_data(&self) -> Result<(), PortfolioStorageError>;

    async fn ping(&self) -> Result<(), PortfolioStorageError>;
}
