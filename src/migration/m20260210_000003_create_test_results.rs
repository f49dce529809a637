//! Create test_result table.

use sea_orm_migration::prelude::*;

use super::m20260210_000002_create_production_lines::ProductionLine;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TestResult::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TestResult::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(TestResult::ProductionLineId).uuid())
                    .col(ColumnDef::new(TestResult::CfuCount).integer().not_null())
                    .col(ColumnDef::new(TestResult::Location).string().not_null())
                    .col(
                        ColumnDef::new(TestResult::TestedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TestResult::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TestResult::Table, TestResult::ProductionLineId)
                            .to(ProductionLine::Table, ProductionLine::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_test_result_production_line_id")
                    .table(TestResult::Table)
                    .col(TestResult::ProductionLineId)
                    .to_owned(),
            )
            .await?;

        // List order is tested_at descending.
        manager
            .create_index(
                Index::create()
                    .name("idx_test_result_tested_at")
                    .table(TestResult::Table)
                    .col(TestResult::TestedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestResult::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TestResult {
    Table,
    Id,
    ProductionLineId,
    CfuCount,
    Location,
    TestedAt,
    CreatedAt,
}
