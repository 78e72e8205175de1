use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reports::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reports::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Reports::Description).text())
                    // JSON-encoded list of layout blocks
                    .col(ColumnDef::new(Reports::Layout).text())
                    .col(ColumnDef::new(Reports::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Reports::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reports::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Reports {
    Table,
    Id,
    Name,
    Description,
    Layout,
    CreatedAt,
    UpdatedAt,
}
