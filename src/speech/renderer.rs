use super::alerts::alert_phrase;
use super::temperature::temperature_phrase;
use crate::Result;
use crate::models::ForecastDocument;
use chrono_tz::Tz;

/// Turns forecast documents into spoken text for one configured timezone
#[derive(Debug, Clone, Copy)]
pub struct ForecastRenderer {
    timezone: Tz,
}

impl ForecastRenderer {
    #[must_use]
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Next-hour summary, temperatures and alerts as one utterance
    pub fn render(&self, forecast: &ForecastDocument) -> Result<String> {
        let temperature = temperature_phrase(forecast, self.timezone)?;
        let alerts = alert_phrase(&forecast.alert_titles());
        Ok(format!("{} {temperature}{alerts}", forecast.summary()))
    }

    /// Same as [`render`](Self::render), introduced by the location name
    pub fn render_at(&self, location: &str, forecast: &ForecastDocument) -> Result<String> {
        Ok(format!("At {location}, {}", self.render(forecast)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::forecast::sample::forecast_with_alerts;
    use chrono_tz::America::Chicago;

    #[test]
    fn test_render_without_alerts() {
        let renderer = ForecastRenderer::new(Chicago);
        let text = renderer.render(&forecast_with_alerts(&[])).unwrap();
        assert_eq!(
            text,
            "Breezy and partly cloudy for the hour. Current temperature is 15 degrees Celsius, \
             with a low of 10 tonight and a high of 26 mid day. "
        );
    }

    #[test]
    fn test_render_with_alerts() {
        let renderer = ForecastRenderer::new(Chicago);
        let doc = forecast_with_alerts(&["Hard Freeze Warning", "Wind Chill Advisory"]);
        let text = renderer.render(&doc).unwrap();

        assert!(text.starts_with("Breezy and partly cloudy for the hour. "));
        assert!(text.ends_with(
            "mid day. The area is under 2 alerts: Hard Freeze Warning and Wind Chill Advisory. "
        ));
    }

    #[test]
    fn test_render_at_location() {
        let renderer = ForecastRenderer::new(Chicago);
        let text = renderer.render_at("home", &forecast_with_alerts(&[])).unwrap();
        assert!(text.starts_with("At home, Breezy and partly cloudy"));
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let renderer = ForecastRenderer::new(Chicago);
        let doc = forecast_with_alerts(&["Flood Watch"]);
        assert_eq!(renderer.render(&doc).unwrap(), renderer.render(&doc).unwrap());
    }
}
