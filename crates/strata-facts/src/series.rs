//! One canonical value per reporting date.
//!
//! A concept is typically reported many times for the same date: once in
//! the first filing and again as a comparative column in later ones.
//! Resolution keeps the most recently filed observation.

use crate::fact::{Fact, FactObservation, UnitSeries};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// A resolved value with the filed date it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPoint {
    /// Reported value
    pub value: Value,
    /// Filed date of the winning observation
    pub filed: Option<String>,
}

/// Reporting date to resolved value, ascending by date.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ResolvedSeries {
    unit: Option<String>,
    points: BTreeMap<String, ResolvedPoint>,
}

impl ResolvedSeries {
    /// Unit the series was resolved from, `None` if no unit was usable.
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// Value for a reporting date.
    pub fn get(&self, date: &str) -> Option<&ResolvedPoint> {
        self.points.get(date)
    }

    /// Reporting dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.points.keys().map(String::as_str)
    }

    /// Entries in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedPoint)> {
        self.points.iter().map(|(date, point)| (date.as_str(), point))
    }

    /// Number of dates.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if no date resolved.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Resolves a fact to one value per reporting date.
///
/// The first preferred unit the fact reports in is used even if none of
/// its observations carries a date. Without a preferred unit, the first
/// unit in the fact's own order that resolves to a non-empty series wins.
pub fn resolve<S: AsRef<str>>(fact: &Fact, preferred_units: &[S]) -> ResolvedSeries {
    if let Some(series) = preferred_units
        .iter()
        .find_map(|unit| fact.unit(unit.as_ref()))
    {
        return collapse(series);
    }

    fact.units()
        .iter()
        .map(collapse)
        .find(|resolved| !resolved.is_empty())
        .unwrap_or_default()
}

fn collapse(series: &UnitSeries) -> ResolvedSeries {
    let mut points = BTreeMap::new();
    for observation in &series.observations {
        let Some(date) = observation.date_key() else {
            continue;
        };
        match points.entry(date.to_string()) {
            Entry::Vacant(entry) => {
                entry.insert(point(observation));
            }
            Entry::Occupied(mut entry) => {
                if supersedes(observation.filed_date(), entry.get().filed.as_deref()) {
                    entry.insert(point(observation));
                }
            }
        }
    }

    ResolvedSeries {
        unit: Some(series.unit.clone()),
        points,
    }
}

/// A later filing replaces an earlier one. Observations without a filed
/// date never replace, and equal dates keep the first seen.
fn supersedes(candidate: Option<&str>, existing: Option<&str>) -> bool {
    candidate.is_some_and(|filed| existing.is_none_or(|current| filed > current))
}

fn point(observation: &FactObservation) -> ResolvedPoint {
    ResolvedPoint {
        value: observation.val.clone(),
        filed: observation.filed_date().map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn fact(units: Value) -> Fact {
        Fact::from_value("Test", &json!({ "units": units })).unwrap()
    }

    #[test]
    fn test_latest_filing_wins() {
        let fact = fact(json!({"USD": [
            {"end": "2022-12-31", "val": 100, "filed": "2023-01-10"},
            {"end": "2022-12-31", "val": 120, "filed": "2023-02-15"}
        ]}));

        let series = resolve(&fact, &["USD"]);
        assert_eq!(series.len(), 1);
        assert_eq!(series.get("2022-12-31").unwrap().value, json!(120));
        assert_eq!(series.get("2022-12-31").unwrap().filed.as_deref(), Some("2023-02-15"));
    }

    #[test]
    fn test_order_of_filings_does_not_matter() {
        let fact = fact(json!({"USD": [
            {"end": "2022-12-31", "val": 120, "filed": "2023-02-15"},
            {"end": "2022-12-31", "val": 100, "filed": "2023-01-10"}
        ]}));
        assert_eq!(resolve(&fact, &["USD"]).get("2022-12-31").unwrap().value, json!(120));
    }

    #[rstest]
    #[case::unfiled_never_replaces(Some("2023-01-01"), None, false)]
    #[case::filed_replaces_unfiled(None, Some("2023-01-01"), true)]
    #[case::tie_keeps_first(Some("2023-01-01"), Some("2023-01-01"), false)]
    #[case::earlier_loses(Some("2023-05-01"), Some("2023-01-01"), false)]
    #[case::both_unfiled(None, None, false)]
    fn test_supersedes(
        #[case] existing: Option<&str>,
        #[case] candidate: Option<&str>,
        #[case] expected: bool,
    ) {
        assert_eq!(supersedes(candidate, existing), expected);
    }

    #[test]
    fn test_unit_preference() {
        let fact = fact(json!({
            "shares": [
                {"end": "2022-12-31", "val": 5, "filed": "2023-02-01"},
                {"end": "2023-06-30", "val": 6, "filed": "2023-08-01"},
                {"end": "2023-12-31", "val": 7, "filed": "2024-02-01"}
            ],
            "USD": [{"end": "2023-06-30", "val": 9, "filed": "2023-08-01"}]
        }));

        let series = resolve(&fact, &["USD", "shares"]);
        assert_eq!(series.unit(), Some("USD"));
        assert_eq!(series.dates().collect::<Vec<_>>(), ["2023-06-30"]);
        assert_eq!(series.get("2023-06-30").map(|point| &point.value), Some(&json!(9)));
    }

    #[test]
    fn test_preferred_unit_used_even_when_empty() {
        let fact = fact(json!({
            "USD": [{"val": 1}],
            "EUR": [{"end": "2023-12-31", "val": 2}]
        }));

        let series = resolve(&fact, &["USD"]);
        assert_eq!(series.unit(), Some("USD"));
        assert!(series.is_empty());
    }

    #[test]
    fn test_fallback_to_first_nonempty_unit() {
        let fact = fact(json!({
            "pure": [{"val": 1}],
            "EUR": [{"end": "2023-12-31", "val": 2}],
            "GBP": [{"end": "2023-12-31", "val": 3}]
        }));

        let series = resolve(&fact, &["USD", "shares"]);
        assert_eq!(series.unit(), Some("EUR"));
        assert_eq!(series.get("2023-12-31").unwrap().value, json!(2));
    }

    #[test]
    fn test_no_usable_unit() {
        let series = resolve(&fact(json!({"pure": [{"val": 1}]})), &["USD"]);
        assert!(series.is_empty());
        assert_eq!(series.unit(), None);
    }

    #[test]
    fn test_date_fallbacks_and_ordering() {
        let fact = fact(json!({"USD": [
            {"instant": "2023-06-30", "val": 2},
            {"end": "", "filed": "2023-01-15", "val": 1},
            {"end": "2024-03-31", "val": 3},
            {"val": 4}
        ]}));

        let series = resolve(&fact, &["USD"]);
        assert_eq!(
            series.dates().collect::<Vec<_>>(),
            ["2023-01-15", "2023-06-30", "2024-03-31"]
        );
    }
}
