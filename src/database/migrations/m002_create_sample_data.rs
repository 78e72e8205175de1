use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SampleData::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SampleData::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SampleData::DataType).string_len(50).not_null())
                    .col(ColumnDef::new(SampleData::Category).string_len(100).not_null())
                    .col(ColumnDef::new(SampleData::Data).text().not_null())
                    .col(ColumnDef::new(SampleData::CreatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        // Lookups by type back GET /sample-data/{data_type}
        manager
            .create_index(
                Index::create()
                    .name("idx-sample_data-data_type")
                    .table(SampleData::Table)
                    .col(SampleData::DataType)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Dropping the table also drops its indexes.
        manager
            .drop_table(Table::drop().table(SampleData::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum SampleData {
    Table,
    Id,
    DataType,
    Category,
    Data,
    CreatedAt,
}
