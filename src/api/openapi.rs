//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CFU Monitor Server",
        version = "0.3.0",
        description = "API server for recording and reviewing microbial contamination (CFU) test results across facilities and production lines"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // Test results endpoints
        api::test_results::list_test_results,
        api::test_results::create_test_result,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // Health
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Test Results
            models::FacilityRef,
            models::ProductionLineRef,
            models::TestResultRecord,
            models::NewTestResult,
            models::TestResultsListResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Test Results", description = "Record and list contamination test results")
    )
)]
pub struct ApiDoc;
