use sea_orm::entity::prelude::*;

use crate::portfolio::application::domain::Skill;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub category: String,
}

impl Model {
    pub fn to_domain(self) -> Skill {
        Skill {
            id: self.id,
            name: self.name,
            category: self.category,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
