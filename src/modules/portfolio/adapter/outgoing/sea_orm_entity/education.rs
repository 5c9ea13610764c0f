use sea_orm::entity::prelude::*;

use crate::portfolio::application::domain::Education;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "education")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub institution: String,

    #[sea_orm(column_type = "Text")]
    pub degree: String,

    #[sea_orm(column_type = "Text")]
    pub duration: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub grade: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,
}

impl Model {
    pub fn to_domain(self) -> Education {
        Education {
            id: self.id,
            institution: self.institution,
            degree: self.degree,
            duration: self.duration,
            grade: self.grade,
            location: self.location,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
