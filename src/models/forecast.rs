//! Forecast document as returned by the weather API
//!
//! The provider's JSON is kept exactly as received so it can be cached in the
//! session and handed back unchanged. A typed view over the parts the skill
//! speaks about is parsed once, when the document is built.

use crate::{Result, SkillError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw forecast for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct ForecastDocument {
    fields: ForecastFields,
    raw: Value,
}

/// The parts of the document the renderer needs
#[derive(Debug, Clone, PartialEq, Deserialize)]
struct ForecastFields {
    currently: Currently,
    daily: Daily,
    minutely: Minutely,
    #[serde(default)]
    alerts: Option<Vec<Alert>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Currently {
    temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Daily {
    data: Vec<DailyData>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Minutely {
    summary: String,
}

/// One day of the daily outlook
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyData {
    /// Lowest temperature of the day in Fahrenheit
    pub temperature_min: f64,
    /// Unix timestamp of the lowest temperature
    pub temperature_min_time: i64,
    /// Highest daytime temperature in Fahrenheit
    pub temperature_high: f64,
    /// Unix timestamp of the highest daytime temperature
    pub temperature_high_time: i64,
}

/// A severe weather alert issued for the area
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Alert {
    pub title: String,
}

impl TryFrom<Value> for ForecastDocument {
    type Error = serde_json::Error;

    fn try_from(raw: Value) -> std::result::Result<Self, Self::Error> {
        let fields = ForecastFields::deserialize(&raw)?;
        Ok(Self { fields, raw })
    }
}

impl From<ForecastDocument> for Value {
    fn from(forecast: ForecastDocument) -> Self {
        forecast.raw
    }
}

impl ForecastDocument {
    /// Parse a forecast document from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a forecast document from an already parsed JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(Self::try_from(value)?)
    }

    /// The document exactly as the provider sent it
    #[must_use]
    pub fn as_json(&self) -> &Value {
        &self.raw
    }

    /// Current temperature in Fahrenheit
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.fields.currently.temperature
    }

    /// Human readable summary of the next hour
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.fields.minutely.summary
    }

    /// Outlook for today, the first entry of the daily data
    pub fn today(&self) -> Result<&DailyData> {
        self.fields
            .daily
            .data
            .first()
            .ok_or_else(|| SkillError::document("daily.data is empty"))
    }

    /// Titles of the active alerts in the order the provider listed them
    #[must_use]
    pub fn alert_titles(&self) -> Vec<&str> {
        self.fields
            .alerts
            .iter()
            .flatten()
            .map(|alert| alert.title.as_str())
            .collect()
    }
}

/// Forecast builders shared by unit tests
#[cfg(test)]
pub(crate) mod sample {
    use super::ForecastDocument;
    use serde_json::json;

    // 2018-01-15 22:00 and 12:00 in Chicago
    pub(crate) const TONIGHT: i64 = 1_516_075_200;
    pub(crate) const NOON: i64 = 1_516_039_200;

    pub(crate) const SUMMARY: &str = "Breezy and partly cloudy for the hour.";

    /// 59F now, low of 50F at `min_time`, high of 79F at `high_time`
    pub(crate) fn forecast_at(
        summary: &str,
        min_time: i64,
        high_time: i64,
        alerts: &[&str],
    ) -> ForecastDocument {
        let mut doc = json!({
            "latitude": 41.8781,
            "longitude": -87.6298,
            "currently": {"temperature": 59.0},
            "minutely": {"summary": summary},
            "daily": {"data": [{
                "temperatureMin": 50.0,
                "temperatureMinTime": min_time,
                "temperatureHigh": 79.0,
                "temperatureHighTime": high_time
            }]}
        });
        if !alerts.is_empty() {
            let alerts: Vec<_> = alerts.iter().map(|title| json!({"title": title})).collect();
            doc["alerts"] = json!(alerts);
        }
        ForecastDocument::from_value(doc).unwrap()
    }

    pub(crate) fn forecast(summary: &str) -> ForecastDocument {
        forecast_at(summary, TONIGHT, NOON, &[])
    }

    pub(crate) fn forecast_with_alerts(alerts: &[&str]) -> ForecastDocument {
        forecast_at(SUMMARY, TONIGHT, NOON, alerts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const MINIMAL: &str = r#"{
        "latitude": 41.8781,
        "longitude": -87.6298,
        "timezone": "America/Chicago",
        "currently": {"time": 1516010400, "temperature": 59.0, "summary": "Breezy"},
        "minutely": {"summary": "Breezy and partly cloudy for the hour.", "data": []},
        "daily": {"data": [{
            "time": 1515996000,
            "temperatureMin": 50.0,
            "temperatureMinTime": 1516075200,
            "temperatureHigh": 79.0,
            "temperatureHighTime": 1516039200
        }]},
        "offset": -6
    }"#;

    #[test]
    fn test_parse_typed_view() {
        let doc = ForecastDocument::from_json(MINIMAL).unwrap();
        assert_eq!(doc.temperature(), 59.0);
        assert_eq!(doc.summary(), "Breezy and partly cloudy for the hour.");
        assert_eq!(doc.today().unwrap().temperature_high_time, 1_516_039_200);
        assert!(doc.alert_titles().is_empty());
    }

    #[test]
    fn test_provider_fields_are_kept() {
        let raw: Value = serde_json::from_str(MINIMAL).unwrap();
        let doc = ForecastDocument::from_json(MINIMAL).unwrap();

        assert_eq!(doc.as_json(), &raw);
        assert_eq!(serde_json::to_value(&doc).unwrap(), raw);
        assert_eq!(doc.as_json()["currently"]["summary"], "Breezy");
    }

    #[test]
    fn test_alert_titles_keep_provider_order() {
        let doc = ForecastDocument::from_value(json!({
            "currently": {"temperature": 59.0},
            "minutely": {"summary": "Clear."},
            "daily": {"data": []},
            "alerts": [
                {"title": "Wind Chill Advisory", "severity": "advisory"},
                {"title": "Hard Freeze Warning", "severity": "warning"},
                {"title": "Wind Chill Advisory", "severity": "advisory"}
            ]
        }))
        .unwrap();

        assert_eq!(
            doc.alert_titles(),
            vec!["Wind Chill Advisory", "Hard Freeze Warning", "Wind Chill Advisory"]
        );
    }

    #[test]
    fn test_empty_daily_data_is_a_document_error() {
        let doc = ForecastDocument::from_value(json!({
            "currently": {"temperature": 59.0},
            "minutely": {"summary": "Clear."},
            "daily": {"data": []}
        }))
        .unwrap();
        assert!(matches!(doc.today(), Err(SkillError::Document { .. })));
    }

    #[test]
    fn test_missing_required_key_is_a_document_error() {
        let result = ForecastDocument::from_json(r#"{"currently": {"temperature": 50}}"#);
        assert!(matches!(result, Err(SkillError::Document { .. })));

        let result = ForecastDocument::from_value(json!({"currently": {}}));
        assert!(matches!(result, Err(SkillError::Document { .. })));
    }

    #[test]
    fn test_integer_temperatures_are_accepted() {
        let json = MINIMAL.replace("59.0", "59");
        let doc = ForecastDocument::from_json(&json).unwrap();
        assert_eq!(doc.temperature(), 59.0);
        assert_eq!(doc.as_json()["currently"]["temperature"], json!(59));
    }
}
