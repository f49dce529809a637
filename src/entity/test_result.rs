//! Test result entity: one CFU count captured at a location.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "test_result")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Nullable: the store does not guarantee the relation is populated.
    pub production_line_id: Option<Uuid>,
    pub cfu_count: i32,
    pub location: String,
    pub tested_at: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::production_line::Entity",
        from = "Column::ProductionLineId",
        to = "super::production_line::Column::Id",
        on_delete = "SetNull"
    )]
    ProductionLine,
}

impl Related<super::production_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductionLine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
