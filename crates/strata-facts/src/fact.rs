//! Concept records and their observations.

use crate::error::{FactsError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single reported value with its filing metadata.
///
/// Only the dates and the value decide whether an observation is usable.
/// Metadata fields of the wrong type read as `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FactObservation {
    /// End date of the period
    #[serde(default)]
    pub end: Option<String>,
    /// Point-in-time date, used by some producers instead of `end`
    #[serde(default)]
    pub instant: Option<String>,
    /// Start date of the period (absent for instant facts)
    #[serde(default, deserialize_with = "lenient")]
    pub start: Option<String>,
    /// Value, numeric or textual
    #[serde(default)]
    pub val: Value,
    /// Filed date
    #[serde(default)]
    pub filed: Option<String>,
    /// Accession number
    #[serde(default, deserialize_with = "lenient")]
    pub accn: Option<String>,
    /// Fiscal year
    #[serde(default, deserialize_with = "lenient")]
    pub fy: Option<i32>,
    /// Fiscal period
    #[serde(default, deserialize_with = "lenient")]
    pub fp: Option<String>,
    /// Form type
    #[serde(default, deserialize_with = "lenient")]
    pub form: Option<String>,
    /// Frame (instant or duration)
    #[serde(default, deserialize_with = "lenient")]
    pub frame: Option<String>,
}

impl FactObservation {
    /// Reporting date: period end, else instant, else filed date.
    pub fn date_key(&self) -> Option<&str> {
        non_empty(&self.end)
            .or_else(|| non_empty(&self.instant))
            .or_else(|| non_empty(&self.filed))
    }

    /// Filed date, if present and non-empty.
    pub fn filed_date(&self) -> Option<&str> {
        non_empty(&self.filed)
    }
}

fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Observations reported in one unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnitSeries {
    /// Unit label, e.g. `USD` or `shares`
    pub unit: String,
    /// Observations in source order
    pub observations: Vec<FactObservation>,
}

/// One concept's record: its label and per-unit observation lists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fact {
    /// Concept name
    pub concept: String,
    /// Human-readable label
    pub label: Option<String>,
    /// Description
    pub description: Option<String>,
    units: Vec<UnitSeries>,
}

impl Fact {
    /// Creates a fact from already-parsed unit series.
    pub fn new(concept: impl Into<String>, units: Vec<UnitSeries>) -> Self {
        Self {
            concept: concept.into(),
            label: None,
            description: None,
            units,
        }
    }

    /// Reads a concept record.
    ///
    /// The record must be an object whose `units` (if present) maps unit
    /// labels to arrays. Individual observations that do not deserialize
    /// are dropped; anything else wrong with the record is an error.
    pub fn from_value(concept: &str, value: &Value) -> Result<Self> {
        let malformed = |reason: &str| FactsError::MalformedConcept {
            concept: concept.to_string(),
            reason: reason.to_string(),
        };

        let record = value.as_object().ok_or_else(|| malformed("record is not an object"))?;
        let text = |key: &str| record.get(key).and_then(Value::as_str).map(str::to_string);

        let units = match record.get("units") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Object(units)) => units
                .iter()
                .map(|(unit, list)| -> Result<UnitSeries> {
                    let list = list
                        .as_array()
                        .ok_or_else(|| malformed(&format!("unit {unit} is not a list")))?;
                    Ok(UnitSeries {
                        unit: unit.clone(),
                        observations: parse_observations(concept, list),
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            Some(_) => return Err(malformed("units is not an object")),
        };

        Ok(Self {
            concept: concept.to_string(),
            label: text("label"),
            description: text("description"),
            units,
        })
    }

    /// Unit series in source order.
    pub fn units(&self) -> &[UnitSeries] {
        &self.units
    }

    /// Looks up the series for one unit label.
    pub fn unit(&self, unit: &str) -> Option<&UnitSeries> {
        self.units.iter().find(|series| series.unit == unit)
    }
}

fn parse_observations(concept: &str, list: &[Value]) -> Vec<FactObservation> {
    list.iter()
        .filter_map(|item| match FactObservation::deserialize(item) {
            Ok(observation) => Some(observation),
            Err(err) => {
                tracing::debug!(concept, error = %err, "observation_dropped");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_date_key_fallbacks() {
        let obs = |end: Option<&str>, instant: Option<&str>, filed: Option<&str>| FactObservation {
            end: end.map(String::from),
            instant: instant.map(String::from),
            filed: filed.map(String::from),
            ..Default::default()
        };

        assert_eq!(obs(Some("2023-12-31"), Some("x"), None).date_key(), Some("2023-12-31"));
        assert_eq!(obs(None, Some("2023-06-30"), Some("y")).date_key(), Some("2023-06-30"));
        assert_eq!(obs(Some(""), None, Some("2024-01-05")).date_key(), Some("2024-01-05"));
        assert_eq!(obs(None, None, None).date_key(), None);
        assert_eq!(obs(None, None, Some("")).filed_date(), None);
    }

    #[test]
    fn test_from_value_keeps_unit_order() {
        let fact = Fact::from_value(
            "Revenues",
            &json!({
                "label": "Revenues",
                "units": {
                    "shares": [{"end": "2023-12-31", "val": 1}],
                    "USD": [{"end": "2023-12-31", "val": 2}]
                }
            }),
        )
        .unwrap();

        let units: Vec<&str> = fact.units().iter().map(|s| s.unit.as_str()).collect();
        assert_eq!(units, ["shares", "USD"]);
        assert_eq!(fact.label.as_deref(), Some("Revenues"));
        assert_eq!(fact.unit("USD").unwrap().observations[0].val, json!(2));
    }

    #[test]
    fn test_malformed_observations_dropped_individually() {
        let fact = Fact::from_value(
            "Assets",
            &json!({"units": {"USD": [
                {"end": "2023-12-31", "val": 5, "fy": 2023},
                {"end": 20231231, "val": 6},
                "not an observation",
                {"end": "2022-12-31", "val": "n/a", "fy": null}
            ]}}),
        )
        .unwrap();

        let observations = &fact.unit("USD").unwrap().observations;
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].fy, Some(2023));
        assert_eq!(observations[1].val, json!("n/a"));
    }

    #[test]
    fn test_mistyped_metadata_keeps_observation() {
        let fact = Fact::from_value(
            "Assets",
            &json!({"units": {"USD": [
                {"end": "2023-12-31", "val": 500, "filed": "2024-02-01", "fy": "2023"},
                {"end": "2022-12-31", "val": 450, "filed": "2023-02-01", "fy": 2022.0,
                 "fp": 4, "form": ["10-K"], "accn": 1, "frame": {}, "start": false}
            ]}}),
        )
        .unwrap();

        let observations = &fact.unit("USD").unwrap().observations;
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].fy, None);
        assert_eq!(observations[0].date_key(), Some("2023-12-31"));
        assert_eq!(observations[1].val, json!(450));
        assert_eq!(observations[1].fp, None);
        assert_eq!(observations[1].filed_date(), Some("2023-02-01"));
    }

    #[test]
    fn test_malformed_records_rejected() {
        assert!(Fact::from_value("A", &json!([1, 2])).is_err());
        assert!(Fact::from_value("A", &json!({"units": "USD"})).is_err());
        assert!(Fact::from_value("A", &json!({"units": {"USD": {"end": "x"}}})).is_err());
    }

    #[test]
    fn test_missing_units_is_empty() {
        let fact = Fact::from_value("A", &json!({"label": "A"})).unwrap();
        assert!(fact.units().is_empty());
    }
}
