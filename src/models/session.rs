//! Per-conversation attribute bag carried by the voice platform

use super::ForecastDocument;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const FORECAST_KEY: &str = "forecast";

/// Session attributes sent with every request and echoed back in the response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionAttributes(Map<String, Value>);

impl SessionAttributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forecast cached by an earlier turn, if any.
    ///
    /// A missing, `null` or empty-object entry counts as no cache. Anything
    /// else must be a valid forecast document.
    pub fn cached_forecast(&self) -> Result<Option<ForecastDocument>> {
        match self.0.get(FORECAST_KEY) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(map)) if map.is_empty() => Ok(None),
            Some(value) => ForecastDocument::from_value(value.clone()).map(Some),
        }
    }

    /// Cache the forecast exactly as the provider sent it
    pub fn store_forecast(&mut self, forecast: &ForecastDocument) {
        self.0.insert(FORECAST_KEY.to_string(), forecast.as_json().clone());
    }

    /// Drop the cached forecast, leaving an empty object in its place
    pub fn clear_forecast(&mut self) {
        self.0.insert(FORECAST_KEY.to_string(), Value::Object(Map::new()));
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl From<Map<String, Value>> for SessionAttributes {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
