//! In-memory portfolio storage.
//!
//! Ordered lists behind one async lock. Data is lost on restart.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::portfolio::application::domain::seed_catalog::{
    self, EducationSeed, ExperienceSeed, ProjectSeed, SkillSeed,
};
use crate::portfolio::application::domain::{
    Education, Experience, Message, NewMessage, Project, Skill,
};
use crate::portfolio::application::ports::outgoing::{PortfolioStorage, PortfolioStorageError};

#[derive(Debug, Default)]
struct MemoryState {
    projects: Vec<Project>,
    skills: Vec<Skill>,
    experience: Vec<Experience>,
    education: Vec<Education>,
    messages: Vec<Message>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryPortfolioStorage {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryPortfolioStorage {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn messages(&self) -> Vec<Message> {
        self.state.read().await.messages.clone()
    }

    #[cfg(test)]
    pub async fn clear_skills(&self) {
        self.state.write().await.skills.clear();
    }
}

#[async_trait]
impl PortfolioStorage for InMemoryPortfolioStorage {
    async fn get_projects(&self) -> Result<Vec<Project>, PortfolioStorageError> {
        Ok(self.state.read().await.projects.clone())
    }

    async fn get_skills(&self) -> Result<Vec<Skill>, PortfolioStorageError> {
        Ok(self.state.read().await.skills.clone())
    }

    async fn get_experience(&self) -> Result<Vec<Experience>, PortfolioStorageError> {
        Ok(self.state.read().await.experience.clone())
    }

    async fn get_education(&self) -> Result<Vec<Education>, PortfolioStorageError> {
        Ok(self.state.read().await.education.clone())
    }

    async fn create_message(&self, input: NewMessage) -> Result<Message, PortfolioStorageError> {
        // Id is derived from the list length while the write lock is held.
        let mut state = self.state.write().await;
        let id = i32::try_from(state.messages.len() + 1)
            .map_err(|_| PortfolioStorageError::DatabaseError("message id overflow".into()))?;

        let message = Message {
            id,
            name: input.name,
            email: input.email,
            message: input.message,
            created_at: Utc::now(),
        };
        state.messages.push(message.clone());

        Ok(message)
    }

    async fn seed_data(&self) -> Result<(), PortfolioStorageError> {
        let mut state = self.state.write().await;

        if !state.projects.is_empty() {
            info!("Portfolio catalog already present; skipping seed");
            return Ok(());
        }

        state.skills = seed_catalog::numbered(seed_catalog::SKILLS, SkillSeed::to_skill);
        state.experience =
            seed_catalog::numbered(seed_catalog::EXPERIENCE, ExperienceSeed::to_experience);
        state.projects = seed_catalog::numbered(seed_catalog::PROJECTS, ProjectSeed::to_project);
        state.education =
            seed_catalog::numbered(seed_catalog::EDUCATION, EducationSeed::to_education);

        info!(
            projects = state.projects.len(),
            skills = state.skills.len(),
            "Seeded in-memory portfolio catalog"
        );
        Ok(())
    }

    async fn ping(&self) -> Result<(), PortfolioStorageError> {
        Ok(())
    }
}
