//! Filter specification edited by the operator.

use chrono::{DateTime, NaiveDate, Utc};

/// User-chosen predicate parameters for filtering the result collection.
///
/// Every field holds the raw text the operator typed. An empty field disables
/// the corresponding predicate, so a default spec passes every record. Date
/// fields accept `YYYY-MM-DD` or full RFC 3339; text that parses as neither
/// disables that bound rather than failing the whole pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Case-insensitive substring to require in the facility name.
    pub facility_name: String,
    /// Case-insensitive substring to require in the production line name.
    pub production_line_name: String,
    /// Inclusive lower bound on the tested-at instant.
    pub from: String,
    /// Inclusive upper bound on the tested-at instant.
    pub to: String,
}

impl FilterSpec {
    /// Create an empty spec. Applying it returns the collection unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no predicate is enabled.
    pub fn is_empty(&self) -> bool {
        self.facility_name.is_empty()
            && self.production_line_name.is_empty()
            && self.from.is_empty()
            && self.to.is_empty()
    }

    /// Reset every field to empty, disabling all predicates.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Effective lower bound, or `None` when the field is empty or does not
    /// parse. A date-only value means the start of that day (UTC).
    pub fn from_bound(&self) -> Option<DateTime<Utc>> {
        parse_bound(&self.from, DayEdge::Start)
    }

    /// Effective upper bound, or `None` when the field is empty or does not
    /// parse. A date-only value means the end of that day (UTC), so the
    /// bound is inclusive of every instant on that calendar date.
    pub fn to_bound(&self) -> Option<DateTime<Utc>> {
        parse_bound(&self.to, DayEdge::End)
    }
}

/// Which edge of a calendar day a date-only bound resolves to.
#[derive(Clone, Copy)]
enum DayEdge {
    Start,
    End,
}

fn parse_bound(text: &str, edge: DayEdge) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        let time = match edge {
            DayEdge::Start => date.and_hms_opt(0, 0, 0),
            DayEdge::End => date.and_hms_nano_opt(23, 59, 59, 999_999_999),
        };
        return time.map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc));
    }

    // Malformed: fail open, the bound is simply not enforced.
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_default_spec_is_empty() {
        let spec = FilterSpec::new();
        assert!(spec.is_empty());
        assert_eq!(spec.from_bound(), None);
        assert_eq!(spec.to_bound(), None);
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let mut spec = FilterSpec {
            facility_name: "acme".to_string(),
            production_line_name: "L1".to_string(),
            from: "2024-01-01".to_string(),
            to: "2024-12-31".to_string(),
        };
        spec.clear();
        assert_eq!(spec, FilterSpec::default());
    }

    #[test]
    fn test_from_bound_is_start_of_day() {
        let spec = FilterSpec {
            from: "2024-01-10".to_string(),
            ..Default::default()
        };
        let bound = spec.from_bound().unwrap();
        assert_eq!(bound.to_rfc3339(), "2024-01-10T00:00:00+00:00");
    }

    #[test]
    fn test_to_bound_is_end_of_day() {
        let spec = FilterSpec {
            to: "2024-01-10".to_string(),
            ..Default::default()
        };
        let bound = spec.to_bound().unwrap();
        assert_eq!(bound.hour(), 23);
        assert_eq!(bound.minute(), 59);
        assert_eq!(bound.second(), 59);
        assert!(bound > "2024-01-10T23:59:59Z".parse::<DateTime<Utc>>().unwrap());
    }

    #[test]
    fn test_rfc3339_bound_is_used_verbatim() {
        let spec = FilterSpec {
            from: "2024-01-10T06:00:00Z".to_string(),
            to: "2024-01-10T18:00:00Z".to_string(),
            ..Default::default()
        };
        assert_eq!(
            spec.from_bound().unwrap(),
            "2024-01-10T06:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
        assert_eq!(
            spec.to_bound().unwrap(),
            "2024-01-10T18:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn test_malformed_date_disables_bound() {
        let spec = FilterSpec {
            from: "not a date".to_string(),
            to: "10/01/2024".to_string(),
            ..Default::default()
        };
        assert_eq!(spec.from_bound(), None);
        assert_eq!(spec.to_bound(), None);
        // Text predicates still count toward emptiness independently.
        assert!(!spec.is_empty());
    }

    #[test]
    fn test_bound_text_is_trimmed() {
        let spec = FilterSpec {
            from: "  2024-01-10  ".to_string(),
            ..Default::default()
        };
        assert!(spec.from_bound().is_some());
    }
}
