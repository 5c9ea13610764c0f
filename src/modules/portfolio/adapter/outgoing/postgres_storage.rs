use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
    Statement, TransactionTrait,
};
use std::sync::Arc;
use tracing::info;

use crate::portfolio::application::domain::seed_catalog::{
    EducationSeed, ExperienceSeed, ProjectSeed, SkillSeed, EDUCATION, EXPERIENCE, PROJECTS, SKILLS,
};
use crate::portfolio::application::domain::{
    Education, Experience, Message, NewMessage, Project, Skill,
};
use crate::portfolio::application::ports::outgoing::{PortfolioStorage, PortfolioStorageError};

// SeaORM entities
use super::sea_orm_entity::{education, experience, messages, projects, skills};

#[derive(Debug, Clone)]
pub struct PortfolioStoragePostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioStoragePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: DbErr) -> PortfolioStorageError {
    PortfolioStorageError::DatabaseError(e.to_string())
}

fn skill_row(seed: &SkillSeed) -> skills::ActiveModel {
    skills::ActiveModel {
        name: Set(seed.name.to_string()),
        category: Set(seed.category.to_string()),
        ..Default::default()
    }
}

fn experience_row(seed: &ExperienceSeed) -> experience::ActiveModel {
    experience::ActiveModel {
        company: Set(seed.company.to_string()),
        role: Set(seed.role.to_string()),
        duration: Set(seed.duration.to_string()),
        description: Set(seed.description.to_string()),
        location: Set(seed.location.map(str::to_string)),
        ..Default::default()
    }
}

fn project_row(seed: &ProjectSeed) -> projects::ActiveModel {
    projects::ActiveModel {
        title: Set(seed.title.to_string()),
        description: Set(seed.description.to_string()),
        tech_stack: Set(seed.tech_stack()),
        link: Set(seed.link.map(str::to_string)),
        github_link: Set(seed.github_link.map(str::to_string)),
        image_url: Set(seed.image_url.map(str::to_string)),
        ..Default::default()
    }
}

fn education_row(seed: &EducationSeed) -> education::ActiveModel {
    education::ActiveModel {
        institution: Set(seed.institution.to_string()),
        degree: Set(seed.degree.to_string()),
        duration: Set(seed.duration.to_string()),
        grade: Set(seed.grade.map(str::to_string)),
        location: Set(seed.location.map(str::to_string)),
        ..Default::default()
    }
}

#[async_trait]
impl PortfolioStorage for PortfolioStoragePostgres {
    async fn get_projects(&self) -> Result<Vec<Project>, PortfolioStorageError> {
        let models = projects::Entity::find()
            .order_by_asc(projects::Column::Id)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(projects::Model::to_domain).collect())
    }

    async fn get_skills(&self) -> Result<Vec<Skill>, PortfolioStorageError> {
        let models = skills::Entity::find()
            .order_by_asc(skills::Column::Id)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(skills::Model::to_domain).collect())
    }

    async fn get_experience(&self) -> Result<Vec<Experience>, PortfolioStorageError> {
        let models = experience::Entity::find()
            .order_by_asc(experience::Column::Id)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(models
            .into_iter()
            .map(experience::Model::to_domain)
            .collect())
    }

    async fn get_education(&self) -> Result<Vec<Education>, PortfolioStorageError> {
        let models = education::Entity::find()
            .order_by_asc(education::Column::Id)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(models
            .into_iter()
            .map(education::Model::to_domain)
            .collect())
    }

    async fn create_message(&self, input: NewMessage) -> Result<Message, PortfolioStorageError> {
        let active = messages::ActiveModel {
            name: Set(input.name),
            email: Set(input.email),
            message: Set(input.message),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await.map_err(db_error)?;

        Ok(inserted.to_domain())
    }

    async fn seed_data(&self) -> Result<(), PortfolioStorageError> {
        // Existence check on projects only; the other tables are not checked.
        let existing = projects::Entity::find()
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        if existing.is_some() {
            info!("Portfolio catalog already present; skipping seed");
            return Ok(());
        }

        let txn = self.db.begin().await.map_err(db_error)?;

        skills::Entity::insert_many(SKILLS.iter().map(skill_row))
            .exec_without_returning(&txn)
            .await
            .map_err(db_error)?;
        experience::Entity::insert_many(EXPERIENCE.iter().map(experience_row))
            .exec_without_returning(&txn)
            .await
            .map_err(db_error)?;
        projects::Entity::insert_many(PROJECTS.iter().map(project_row))
            .exec_without_returning(&txn)
            .await
            .map_err(db_error)?;
        education::Entity::insert_many(EDUCATION.iter().map(education_row))
            .exec_without_returning(&txn)
            .await
            .map_err(db_error)?;

        txn.commit().await.map_err(db_error)?;

        info!(
            projects = PROJECTS.len(),
            skills = SKILLS.len(),
            "Seeded portfolio catalog tables"
        );
        Ok(())
    }

    async fn ping(&self) -> Result<(), PortfolioStorageError> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1",
            ))
            .await
            .map_err(db_error)?;

        Ok(())
    }
}
