pub use sea_orm_migration::prelude::*;

mod m20250110_000001_create_table_projects;
mod m20250110_000002_create_table_skills;
mod m20250110_000003_create_table_experience;
mod m20250110_000004_create_table_education;
mod m20250110_000005_create_table_messages;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250110_000001_create_table_projects::Migration),
            Box::new(m20250110_000002_create_table_skills::Migration),
            Box::new(m20250110_000003_create_table_experience::Migration),
            Box::new(m20250110_000004_create_table_education::Migration),
            Box::new(m20250110_000005_create_table_messages::Migration),
        ]
    }
}
