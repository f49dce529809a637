//! Database queries for test results.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::entity::facility::{self, Entity as Facility};
use crate::entity::production_line;
use crate::entity::test_result::{self, Entity as TestResult};
use crate::error::{AppError, AppResult};

use super::DbPool;

/// Represents a test result to be inserted.
pub struct NewTestResultRow {
    pub production_line_id: Option<Uuid>,
    pub cfu_count: i32,
    pub location: String,
    pub tested_at: DateTime<Utc>,
}

/// A test result row joined with its (possibly absent) relations.
pub type TestResultWithRelations = (
    test_result::Model,
    Option<production_line::Model>,
    Option<facility::Model>,
);

impl DbPool {
    /// Insert a new test result.
    pub async fn insert_test_result(
        &self,
        row: NewTestResultRow,
    ) -> AppResult<test_result::Model> {
        let model = test_result::ActiveModel {
            id: Set(Uuid::now_v7()),
            production_line_id: Set(row.production_line_id),
            cfu_count: Set(row.cfu_count),
            location: Set(row.location),
            tested_at: Set(row.tested_at),
            created_at: Set(Utc::now()),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert test result: {}", e)))?;

        Ok(result)
    }

    /// List the full result collection with relations, newest tested first.
    ///
    /// Two queries: results joined to their production lines, then a batch
    /// fetch of the referenced facilities joined in memory.
    pub async fn list_test_results(&self) -> AppResult<Vec<TestResultWithRelations>> {
        let rows = TestResult::find()
            .find_also_related(production_line::Entity)
            .order_by_desc(test_result::Column::TestedAt)
            .order_by_desc(test_result::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list test results: {}", e)))?;

        let facility_ids: Vec<Uuid> = rows
            .iter()
            .filter_map(|(_, line)| line.as_ref().map(|line| line.facility_id))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let facility_map: HashMap<Uuid, facility::Model> = if facility_ids.is_empty() {
            HashMap::new()
        } else {
            Facility::find()
                .filter(facility::Column::Id.is_in(facility_ids))
                .all(self.connection())
                .await
                .map_err(|e| AppError::Database(format!("Failed to fetch facilities: {}", e)))?
                .into_iter()
                .map(|f| (f.id, f))
                .collect()
        };

        let joined = rows
            .into_iter()
            .map(|(result, line)| {
                let facility = line
                    .as_ref()
                    .and_then(|line| facility_map.get(&line.facility_id).cloned());
                (result, line, facility)
            })
            .collect();

        Ok(joined)
    }
}
