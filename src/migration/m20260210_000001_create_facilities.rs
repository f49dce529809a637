//! Create facility table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Facility::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Facility::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Facility::Name).string().not_null())
                    .col(
                        ColumnDef::new(Facility::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_facility_name")
                    .table(Facility::Table)
                    .col(Facility::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Facility::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Facility {
    Table,
    Id,
    Name,
    CreatedAt,
}
