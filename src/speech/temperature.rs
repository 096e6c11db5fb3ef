use super::time_of_day::TimeOfDay;
use super::units::degrees_f_to_c;
use crate::models::ForecastDocument;
use crate::{Result, SkillError};
use chrono::{DateTime, Timelike};
use chrono_tz::Tz;

/// Local hour of day for a Unix timestamp
pub fn local_hour(timestamp: i64, timezone: Tz) -> Result<u32> {
    let utc = DateTime::from_timestamp(timestamp, 0)
        .ok_or_else(|| SkillError::document(format!("Timestamp out of range: {timestamp}")))?;
    Ok(utc.with_timezone(&timezone).hour())
}

/// Describe the current temperature and today's low and high.
///
/// The times of the low and high are spoken as a fuzzy time of day in the
/// given timezone.
pub fn temperature_phrase(forecast: &ForecastDocument, timezone: Tz) -> Result<String> {
    let today = forecast.today()?;

    let current = degrees_f_to_c(forecast.temperature());
    let low = degrees_f_to_c(today.temperature_min);
    let low_time = TimeOfDay::from_hour(local_hour(today.temperature_min_time, timezone)?.into());
    let high = degrees_f_to_c(today.temperature_high);
    let high_time = TimeOfDay::from_hour(local_hour(today.temperature_high_time, timezone)?.into());

    Ok(format!(
        "Current temperature is {current} degrees Celsius, \
         with a low of {low} {low_time} \
         and a high of {high} {high_time}. "
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::forecast::sample::{NOON, SUMMARY, TONIGHT, forecast_at};
    use chrono_tz::America::Chicago;
    use serde_json::json;

    #[test]
    fn test_local_hour_uses_timezone() {
        assert_eq!(local_hour(TONIGHT, Chicago).unwrap(), 22);
        assert_eq!(local_hour(TONIGHT, chrono_tz::UTC).unwrap(), 4);
    }

    #[test]
    fn test_get_temperature() {
        let doc = forecast_at(SUMMARY, TONIGHT, NOON, &[]);
        let phrase = temperature_phrase(&doc, Chicago).unwrap();
        assert_eq!(
            phrase,
            "Current temperature is 15 degrees Celsius, \
             with a low of 10 tonight and a high of 26 mid day. "
        );
    }

    #[test]
    fn test_same_instant_reads_differently_in_another_zone() {
        let doc = forecast_at(SUMMARY, TONIGHT, NOON, &[]);
        let phrase = temperature_phrase(&doc, chrono_tz::UTC).unwrap();
        assert!(phrase.contains("a low of 10 early morning"));
        assert!(phrase.contains("a high of 26 this evening"));
    }

    #[test]
    fn test_empty_daily_data_fails() {
        let doc = ForecastDocument::from_value(json!({
            "currently": {"temperature": 59.0},
            "minutely": {"summary": SUMMARY},
            "daily": {"data": []}
        }))
        .unwrap();
        assert!(matches!(
            temperature_phrase(&doc, Chicago),
            Err(SkillError::Document { .. })
        ));
    }
}
