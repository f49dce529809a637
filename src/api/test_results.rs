//! Test results API handlers: list the full collection, submit a new result.
//!
//! Listing deliberately returns everything in one ordered payload; filtering
//! happens client-side against the full collection (see [`crate::filter`]).

use actix_web::{HttpResponse, web};
use tracing::info;

use crate::db::DbPool;
use crate::db::test_results::{NewTestResultRow, TestResultWithRelations};
use crate::error::{AppError, AppResult};
use crate::models::{
    FacilityRef, NewTestResult, ProductionLineRef, TestResultRecord, TestResultsListResponse,
};

/// Map a joined database row onto the wire record.
fn to_record(row: TestResultWithRelations) -> TestResultRecord {
    let (result, line, facility) = row;
    TestResultRecord {
        id: result.id,
        cfu_count: result.cfu_count,
        location: result.location,
        tested_at: result.tested_at,
        production_line: line.map(|line| ProductionLineRef {
            id: line.id,
            name: line.name,
            facility: facility.map(|facility| FacilityRef {
                id: facility.id,
                name: facility.name,
            }),
        }),
    }
}

/// Reject submissions with blank names or a negative count.
fn validate_new_result(req: &NewTestResult) -> AppResult<()> {
    if req.facility_name.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "facilityName must not be empty".to_string(),
        ));
    }
    if req.production_line_name.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "productionLineName must not be empty".to_string(),
        ));
    }
    if req.cfu_count < 0 {
        return Err(AppError::InvalidInput(
            "cfuCount must be a non-negative integer".to_string(),
        ));
    }
    Ok(())
}

/// List all test results.
///
/// Returns the full collection, newest tested first, with the production
/// line and facility relations embedded where present.
#[utoipa::path(
    get,
    path = "/api/test-results",
    tag = "Test Results",
    responses(
        (status = 200, description = "Full result collection", body = TestResultsListResponse),
    )
)]
pub async fn list_test_results(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let rows = pool.list_test_results().await?;
    let data: Vec<TestResultRecord> = rows.into_iter().map(to_record).collect();

    Ok(HttpResponse::Ok().json(TestResultsListResponse { data }))
}

/// Submit a new test result.
///
/// The facility and production line are resolved by name, created on first
/// use.
#[utoipa::path(
    post,
    path = "/api/test-results",
    tag = "Test Results",
    request_body = NewTestResult,
    responses(
        (status = 201, description = "Test result created", body = TestResultRecord),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_test_result(
    pool: web::Data<DbPool>,
    body: web::Json<NewTestResult>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    validate_new_result(&req)?;

    let facility_name = req.facility_name.trim();
    let line_name = req.production_line_name.trim();

    let facility = pool.get_or_create_facility(facility_name).await?;
    let line = pool
        .get_or_create_production_line(facility.id, line_name)
        .await?;

    let result = pool
        .insert_test_result(NewTestResultRow {
            production_line_id: Some(line.id),
            cfu_count: req.cfu_count,
            location: req.location,
            tested_at: req.tested_at,
        })
        .await?;

    info!(
        "Test result recorded: id={}, facility={}, line={}, cfu_count={}",
        result.id, facility.name, line.name, result.cfu_count
    );

    let record = to_record((result, Some(line), Some(facility)));

    Ok(HttpResponse::Created().json(record))
}

/// Configure test results routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/test-results")
            .route(web::get().to(list_test_results))
            .route(web::post().to(create_test_result)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn submission(facility: &str, line: &str, cfu_count: i32) -> NewTestResult {
        NewTestResult {
            facility_name: facility.to_string(),
            production_line_name: line.to_string(),
            cfu_count,
            location: "drain 3".to_string(),
            tested_at: Utc::now(),
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(validate_new_result(&submission("Acme Dairy", "L1", 0)).is_ok());
    }

    #[test]
    fn test_blank_names_rejected() {
        assert!(validate_new_result(&submission("", "L1", 5)).is_err());
        assert!(validate_new_result(&submission("   ", "L1", 5)).is_err());
        assert!(validate_new_result(&submission("Acme Dairy", "", 5)).is_err());
    }

    #[test]
    fn test_negative_cfu_count_rejected() {
        assert!(validate_new_result(&submission("Acme Dairy", "L1", -1)).is_err());
    }

    #[test]
    fn test_to_record_with_missing_relations() {
        let result = crate::entity::test_result::Model {
            id: Uuid::now_v7(),
            production_line_id: None,
            cfu_count: 4,
            location: "conveyor".to_string(),
            tested_at: Utc::now(),
            created_at: Utc::now(),
        };

        let record = to_record((result, None, None));
        assert!(record.production_line.is_none());
        assert_eq!(record.cfu_count, 4);
    }
}
