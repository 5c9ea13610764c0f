use async_trait::async_trait;
use chrono::Utc;

use crate::portfolio::application::domain::{
    Education, Experience, Message, NewMessage, Profile, Project, Skill,
};
use crate::portfolio::application::ports::incoming::use_cases::{
    ContactMessageCommand, GetPortfolioError, GetPortfolioUseCase, PortfolioView,
    SubmitContactError, SubmitContactUseCase,
};
use crate::portfolio::application::ports::outgoing::{PortfolioStorage, PortfolioStorageError};
use crate::tests::support::portfolio_fixtures::sample_message;

// ============================================================
// Storage stub
// ============================================================

/// Fixed-content storage. Each `failing_*` switch makes one operation
/// return `DatabaseError`.
#[derive(Clone, Default)]
pub struct StubPortfolioStorage {
    projects: Vec<Project>,
    skills: Vec<Skill>,
    skills_error: Option<String>,
    messages_error: Option<String>,
    seed_error: Option<String>,
    ping_error: Option<String>,
}

impl StubPortfolioStorage {
    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    pub fn with_skills(mut self, skills: Vec<Skill>) -> Self {
        self.skills = skills;
        self
    }

    pub fn failing_skills(mut self, msg: &str) -> Self {
        self.skills_error = Some(msg.to_string());
        self
    }

    pub fn failing_messages(mut self, msg: &str) -> Self {
        self.messages_error = Some(msg.to_string());
        self
    }

    pub fn failing_seed(mut self, msg: &str) -> Self {
        self.seed_error = Some(msg.to_string());
        self
    }

    pub fn failing_ping(mut self, msg: &str) -> Self {
        self.ping_error = Some(msg.to_string());
        self
    }
}

fn fail_with(msg: &Option<String>) -> Result<(), PortfolioStorageError> {
    match msg {
        Some(msg) => Err(PortfolioStorageError::DatabaseError(msg.clone())),
        None => Ok(()),
    }
}

#[async_trait]
impl PortfolioStorage for StubPortfolioStorage {
    async fn get_projects(&self) -> Result<Vec<Project>, PortfolioStorageError> {
        Ok(self.projects.clone())
    }

    async fn get_skills(&self) -> Result<Vec<Skill>, PortfolioStorageError> {
        fail_with(&self.skills_error)?;
        Ok(self.skills.clone())
    }

    async fn get_experience(&self) -> Result<Vec<Experience>, PortfolioStorageError> {
        Ok(vec![])
    }

    async fn get_education(&self) -> Result<Vec<Education>, PortfolioStorageError> {
        Ok(vec![])
    }

    async fn create_message(&self, input: NewMessage) -> Result<Message, PortfolioStorageError> {
        fail_with(&self.messages_error)?;
        Ok(Message {
            id: 1,
            name: input.name,
            email: input.email,
            message: input.message,
            created_at: Utc::now(),
        })
    }

    async fn seed_data(&self) -> Result<(), PortfolioStorageError> {
        fail_with(&self.seed_error)
    }

    async fn ping(&self) -> Result<(), PortfolioStorageError> {
        fail_with(&self.ping_error)
    }
}

// ============================================================
// Use case stubs
// ============================================================

#[derive(Clone)]
pub struct StubGetPortfolioUseCase {
    result: Result<PortfolioView, GetPortfolioError>,
}

impl StubGetPortfolioUseCase {
    pub fn success(view: PortfolioView) -> Self {
        Self { result: Ok(view) }
    }

    pub fn empty() -> Self {
        Self::success(PortfolioView {
            projects: vec![],
            skills: vec![],
            experience: vec![],
            education: vec![],
            profile: Profile::owner(),
        })
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetPortfolioError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetPortfolioUseCase for StubGetPortfolioUseCase {
    async fn execute(&self) -> Result<PortfolioView, GetPortfolioError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubSubmitContactUseCase {
    result: Result<Message, SubmitContactError>,
}

impl StubSubmitContactUseCase {
    pub fn success() -> Self {
        Self {
            result: Ok(sample_message(1)),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(SubmitContactError::StorageError(msg.to_string())),
        }
    }
}

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(
        &self,
        _command: ContactMessageCommand,
    ) -> Result<Message, SubmitContactError> {
        self.result.clone()
    }
}
