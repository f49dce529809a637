//! Create production_line table.

use sea_orm_migration::prelude::*;

use super::m20260210_000001_create_facilities::Facility;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductionLine::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductionLine::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProductionLine::FacilityId).uuid().not_null())
                    .col(ColumnDef::new(ProductionLine::Name).string().not_null())
                    .col(
                        ColumnDef::new(ProductionLine::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ProductionLine::Table, ProductionLine::FacilityId)
                            .to(Facility::Table, Facility::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One line name per facility.
        manager
            .create_index(
                Index::create()
                    .name("idx_production_line_facility_name")
                    .table(ProductionLine::Table)
                    .col(ProductionLine::FacilityId)
                    .col(ProductionLine::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductionLine::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProductionLine {
    Table,
    Id,
    FacilityId,
    Name,
    CreatedAt,
}
