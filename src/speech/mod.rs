//! Forecast to speech rendering
//!
//! Small pure functions that each produce one part of the spoken forecast:
//! unit conversion, fuzzy time of day, the temperature sentence and the alert
//! clause. [`ForecastRenderer`] puts them together.

pub mod alerts;
pub mod renderer;
pub mod temperature;
pub mod time_of_day;
pub mod units;

pub use alerts::alert_phrase;
pub use renderer::ForecastRenderer;
pub use temperature::temperature_phrase;
pub use time_of_day::{TimeOfDay, fuzzy_time};
pub use units::degrees_f_to_c;
