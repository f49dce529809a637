//! Domain models and wire DTOs shared by the API server and the review client.
//!
//! Field names are camelCase on the wire, matching the original
//! `/api/test-results` contract consumed by the web frontend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A facility as embedded in a test result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacilityRef {
    pub id: Uuid,
    pub name: String,
}

/// A production line as embedded in a test result.
///
/// The facility relation is optional on the wire; consumers must not assume
/// it is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductionLineRef {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility: Option<FacilityRef>,
}

/// A single contamination test result as returned by the store.
///
/// `production_line` may be structurally absent for a record; the store does
/// not guarantee the relation is always populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestResultRecord {
    pub id: Uuid,
    /// Colony-forming-unit count, non-negative.
    pub cfu_count: i32,
    /// Free-text sublocation where the sample was taken.
    pub location: String,
    /// Instant the sample was tested.
    pub tested_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_line: Option<ProductionLineRef>,
}

impl TestResultRecord {
    /// Name of the production line, if the relation is populated.
    pub fn production_line_name(&self) -> Option<&str> {
        self.production_line.as_ref().map(|line| line.name.as_str())
    }

    /// Name of the facility, if both nested relations are populated.
    pub fn facility_name(&self) -> Option<&str> {
        self.production_line
            .as_ref()
            .and_then(|line| line.facility.as_ref())
            .map(|facility| facility.name.as_str())
    }
}

/// Payload for submitting a new test result.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTestResult {
    pub facility_name: String,
    pub production_line_name: String,
    pub cfu_count: i32,
    pub location: String,
    pub tested_at: DateTime<Utc>,
}

/// Response envelope for the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TestResultsListResponse {
    pub data: Vec<TestResultRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_without_production_line() {
        let json = r#"{
            "id": "019bcad1-9368-7abc-9def-123456789abc",
            "cfuCount": 12,
            "location": "drain 3",
            "testedAt": "2024-02-01T08:30:00Z"
        }"#;

        let record: TestResultRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.cfu_count, 12);
        assert!(record.production_line.is_none());
        assert_eq!(record.production_line_name(), None);
        assert_eq!(record.facility_name(), None);
    }

    #[test]
    fn test_record_deserializes_with_line_but_no_facility() {
        let json = r#"{
            "id": "019bcad1-9368-7abc-9def-123456789abc",
            "cfuCount": 0,
            "location": "conveyor",
            "testedAt": "2024-02-01T08:30:00Z",
            "productionLine": {
                "id": "019bcad1-9368-7abc-9def-aaaaaaaaaaaa",
                "name": "Line 1"
            }
        }"#;

        let record: TestResultRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.production_line_name(), Some("Line 1"));
        assert_eq!(record.facility_name(), None);
    }

    #[test]
    fn test_record_round_trips_camel_case() {
        let record = TestResultRecord {
            id: Uuid::nil(),
            cfu_count: 42,
            location: "filler head".to_string(),
            tested_at: "2024-03-01T12:00:00Z".parse().unwrap(),
            production_line: Some(ProductionLineRef {
                id: Uuid::nil(),
                name: "L2".to_string(),
                facility: Some(FacilityRef {
                    id: Uuid::nil(),
                    name: "Beta Foods".to_string(),
                }),
            }),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["cfuCount"], 42);
        assert_eq!(json["productionLine"]["facility"]["name"], "Beta Foods");
        assert_eq!(json["testedAt"], "2024-03-01T12:00:00Z");
    }
}
