use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experience::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experience::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Experience::Company).text().not_null())
                    .col(ColumnDef::new(Experience::Role).text().not_null())
                    .col(ColumnDef::new(Experience::Duration).text().not_null())
                    .col(ColumnDef::new(Experience::Description).text().not_null())
                    .col(ColumnDef::new(Experience::Location).text())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Experience::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experience {
    Table,
    Id,
    Company,
    Role,
    Duration,
    Description,
    Location,
}
