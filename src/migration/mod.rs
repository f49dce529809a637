//! SeaORM database migrations.

pub use sea_orm_migration::prelude::*;

mod m20260210_000001_create_facilities;
mod m20260210_000002_create_production_lines;
mod m20260210_000003_create_test_results;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260210_000001_create_facilities::Migration),
            Box::new(m20260210_000002_create_production_lines::Migration),
            Box::new(m20260210_000003_create_test_results::Migration),
        ]
    }
}
