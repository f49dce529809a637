//! The filtering pass itself.
//!
//! [`apply`] is a pure function: it never mutates the collection or the
//! spec, returns a fresh sequence, and cannot fail. Predicates combine with
//! logical AND; a predicate whose configuration is empty (or, for dates,
//! unparseable) is always satisfied.

use chrono::{DateTime, Utc};

use crate::filter::spec::FilterSpec;
use crate::models::TestResultRecord;

/// Derive the filtered view of `all_results` under `spec`.
///
/// The output is a subsequence of the input in original relative order,
/// containing exactly the records that satisfy every enabled predicate.
/// Records whose production-line or facility relation is absent never match
/// an enabled name predicate, regardless of the filter text.
pub fn apply(all_results: &[TestResultRecord], spec: &FilterSpec) -> Vec<TestResultRecord> {
    let facility_needle = needle(&spec.facility_name);
    let line_needle = needle(&spec.production_line_name);
    let from = spec.from_bound();
    let to = spec.to_bound();

    all_results
        .iter()
        .filter(|record| {
            matches_name(facility_needle.as_deref(), record.facility_name())
                && matches_name(line_needle.as_deref(), record.production_line_name())
                && matches_from(from, record.tested_at)
                && matches_to(to, record.tested_at)
        })
        .cloned()
        .collect()
}

/// The unfiltered view: the full collection, in store order.
///
/// Equivalent to `apply(all_results, &FilterSpec::default())`; the caller
/// pairs this with resetting its spec.
pub fn clear_view(all_results: &[TestResultRecord]) -> Vec<TestResultRecord> {
    all_results.to_vec()
}

/// Lowercased needle, or `None` when the predicate is disabled.
fn needle(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_lowercase())
    }
}

/// Case-insensitive substring match. An absent field never matches an
/// enabled predicate.
fn matches_name(needle: Option<&str>, field: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(needle) => field.is_some_and(|value| value.to_lowercase().contains(needle)),
    }
}

fn matches_from(bound: Option<DateTime<Utc>>, tested_at: DateTime<Utc>) -> bool {
    bound.is_none_or(|from| tested_at >= from)
}

fn matches_to(bound: Option<DateTime<Utc>>, tested_at: DateTime<Utc>) -> bool {
    bound.is_none_or(|to| tested_at <= to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FacilityRef, ProductionLineRef};
    use uuid::Uuid;

    fn record(facility: Option<&str>, line: Option<&str>, tested_at: &str) -> TestResultRecord {
        let production_line = line.map(|name| ProductionLineRef {
            id: Uuid::new_v4(),
            name: name.to_string(),
            facility: facility.map(|name| FacilityRef {
                id: Uuid::new_v4(),
                name: name.to_string(),
            }),
        });
        TestResultRecord {
            id: Uuid::new_v4(),
            cfu_count: 5,
            location: "drain".to_string(),
            tested_at: tested_at.parse().unwrap(),
            production_line,
        }
    }

    fn sample_collection() -> Vec<TestResultRecord> {
        vec![
            record(Some("Acme Dairy"), Some("L1"), "2024-02-01T09:00:00Z"),
            record(Some("Beta Foods"), Some("L2"), "2024-03-01T09:00:00Z"),
        ]
    }

    fn spec(facility: &str, line: &str, from: &str, to: &str) -> FilterSpec {
        FilterSpec {
            facility_name: facility.to_string(),
            production_line_name: line.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn test_empty_spec_is_identity() {
        let all = sample_collection();
        let view = apply(&all, &FilterSpec::default());
        assert_eq!(view, all);
    }

    #[test]
    fn test_empty_collection() {
        let view = apply(&[], &spec("acme", "", "", ""));
        assert!(view.is_empty());
    }

    #[test]
    fn test_facility_substring_is_case_insensitive() {
        let all = vec![record(Some("AcmeDairy"), Some("L1"), "2024-02-01T09:00:00Z")];
        assert_eq!(apply(&all, &spec("acme", "", "", "")).len(), 1);
        assert_eq!(apply(&all, &spec("DAIRY", "", "", "")).len(), 1);
        assert!(apply(&all, &spec("beta", "", "", "")).is_empty());
    }

    #[test]
    fn test_facility_filter_selects_matching_record_only() {
        let all = sample_collection();
        let view = apply(&all, &spec("acme", "", "", ""));
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].facility_name(), Some("Acme Dairy"));
    }

    #[test]
    fn test_production_line_filter() {
        let all = sample_collection();
        let view = apply(&all, &spec("", "l2", "", ""));
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].production_line_name(), Some("L2"));
    }

    #[test]
    fn test_missing_relation_never_matches_enabled_name_predicates() {
        let no_line = record(None, None, "2024-02-01T09:00:00Z");
        let line_no_facility = record(None, Some("L9"), "2024-02-01T09:00:00Z");

        assert!(apply(&[no_line.clone()], &spec("acme", "", "", "")).is_empty());
        assert!(apply(&[no_line], &spec("", "l1", "", "")).is_empty());
        assert!(apply(&[line_no_facility.clone()], &spec("acme", "", "", "")).is_empty());
        // The line name itself is present and matchable.
        assert_eq!(apply(&[line_no_facility], &spec("", "l9", "", "")).len(), 1);
    }

    #[test]
    fn test_missing_relation_excluded_even_when_other_fields_qualify() {
        // Date range matches, but the enabled facility predicate cannot be
        // satisfied without the relation.
        let orphan = record(None, None, "2024-02-01T09:00:00Z");
        let view = apply(&[orphan], &spec("acme", "", "2024-01-01", "2024-12-31"));
        assert!(view.is_empty());
    }

    #[test]
    fn test_date_range_selects_in_range_records() {
        let all = sample_collection();
        let view = apply(&all, &spec("", "", "2024-02-15", "2024-03-31"));
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].facility_name(), Some("Beta Foods"));
    }

    #[test]
    fn test_from_bound_is_inclusive_at_start_of_day() {
        let all = vec![record(Some("Acme"), Some("L1"), "2024-01-10T00:00:00Z")];
        assert_eq!(apply(&all, &spec("", "", "2024-01-10", "")).len(), 1);
        assert!(apply(&all, &spec("", "", "2024-01-11", "")).is_empty());
    }

    #[test]
    fn test_to_bound_includes_whole_day() {
        let all = vec![record(Some("Acme"), Some("L1"), "2024-01-10T23:59:59Z")];
        assert_eq!(apply(&all, &spec("", "", "", "2024-01-10")).len(), 1);
        assert!(apply(&all, &spec("", "", "", "2024-01-09")).is_empty());
    }

    #[test]
    fn test_malformed_date_text_fails_open() {
        let all = sample_collection();
        let view = apply(&all, &spec("", "", "garbage", "also garbage"));
        assert_eq!(view, all);
    }

    #[test]
    fn test_predicates_combine_with_and() {
        // Both facility names contain "a"; only the first also passes the
        // from-bound that excludes March.
        let all = vec![
            record(Some("Acme Dairy"), Some("L1"), "2024-02-01T09:00:00Z"),
            record(Some("Beta Foods"), Some("L2"), "2024-03-01T09:00:00Z"),
        ];
        let view = apply(&all, &spec("a", "", "2024-01-01", "2024-02-28"));
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].facility_name(), Some("Acme Dairy"));

        // Sanity: the substring alone matches both.
        assert_eq!(apply(&all, &spec("a", "", "", "")).len(), 2);
    }

    #[test]
    fn test_output_preserves_relative_order() {
        let all = vec![
            record(Some("Acme North"), Some("L1"), "2024-02-03T09:00:00Z"),
            record(Some("Beta Foods"), Some("L2"), "2024-02-02T09:00:00Z"),
            record(Some("Acme South"), Some("L3"), "2024-02-01T09:00:00Z"),
        ];
        let view = apply(&all, &spec("acme", "", "", ""));
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].facility_name(), Some("Acme North"));
        assert_eq!(view[1].facility_name(), Some("Acme South"));
    }

    #[test]
    fn test_reapplying_same_spec_is_fixpoint() {
        let all = sample_collection();
        let spec = spec("a", "", "2024-01-01", "");
        let once = apply(&all, &spec);
        let twice = apply(&once, &spec);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_apply_does_not_mutate_inputs() {
        let all = sample_collection();
        let before = all.clone();
        let spec = spec("acme", "", "", "");
        let _ = apply(&all, &spec);
        assert_eq!(all, before);
        assert_eq!(spec.facility_name, "acme");
    }

    #[test]
    fn test_clear_view_returns_full_collection() {
        let all = sample_collection();
        assert_eq!(clear_view(&all), all);
    }
}
