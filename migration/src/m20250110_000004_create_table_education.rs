use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Education::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Education::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Education::Institution).text().not_null())
                    .col(ColumnDef::new(Education::Degree).text().not_null())
                    .col(ColumnDef::new(Education::Duration).text().not_null())
                    .col(ColumnDef::new(Education::Grade).text())
                    .col(ColumnDef::new(Education::Location).text())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Education::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Education {
    Table,
    Id,
    Institution,
    Degree,
    Duration,
    Grade,
    Location,
}
