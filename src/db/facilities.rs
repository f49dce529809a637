//! Database queries for facilities and production lines.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::entity::facility::{self, Entity as Facility};
use crate::entity::production_line::{self, Entity as ProductionLine};
use crate::error::{AppError, AppResult};

use super::DbPool;

impl DbPool {
    /// Find a facility by exact name, creating it if it does not exist.
    pub async fn get_or_create_facility(&self, name: &str) -> AppResult<facility::Model> {
        let existing = Facility::find()
            .filter(facility::Column::Name.eq(name))
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to look up facility: {}", e)))?;

        if let Some(found) = existing {
            return Ok(found);
        }

        let model = facility::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(name.to_string()),
            created_at: Set(Utc::now()),
        };

        let created = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert facility: {}", e)))?;

        Ok(created)
    }

    /// Find a production line by name within a facility, creating it if it
    /// does not exist.
    pub async fn get_or_create_production_line(
        &self,
        facility_id: Uuid,
        name: &str,
    ) -> AppResult<production_line::Model> {
        let existing = ProductionLine::find()
            .filter(production_line::Column::FacilityId.eq(facility_id))
            .filter(production_line::Column::Name.eq(name))
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to look up production line: {}", e)))?;

        if let Some(found) = existing {
            return Ok(found);
        }

        let model = production_line::ActiveModel {
            id: Set(Uuid::now_v7()),
            facility_id: Set(facility_id),
            name: Set(name.to_string()),
            created_at: Set(Utc::now()),
        };

        let created = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert production line: {}", e)))?;

        Ok(created)
    }
}
