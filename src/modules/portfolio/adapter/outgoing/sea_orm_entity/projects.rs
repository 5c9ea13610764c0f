use sea_orm::entity::prelude::*;

use crate::portfolio::application::domain::Project;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    // Postgres text[]; element order is preserved
    pub tech_stack: Vec<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub link: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub github_link: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
}

impl Model {
    pub fn to_domain(self) -> Project {
        Project {
            id: self.id,
            title: self.title,
            description: self.description,
            tech_stack: self.tech_stack,
            link: self.link,
            github_link: self.github_link,
            image_url: self.image_url,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
