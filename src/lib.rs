//! `weather-skill` - a voice assistant skill that speaks the local forecast
//!
//! This library turns voice platform requests into spoken weather summaries:
//! it resolves the asked-for location, fetches (or reuses) a forecast and
//! renders it as a sentence in Celsius with fuzzy local times of day.

pub mod config;
pub mod error;
pub mod location_resolver;
pub mod models;
pub mod secrets;
pub mod skill;
pub mod speech;
pub mod telemetry;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::SkillConfig;
pub use error::SkillError;
pub use location_resolver::{LocationLookup, LocationResolver};
pub use models::{
    Coordinates, ForecastDocument, LocationTable, SessionAttributes, SkillRequest, SkillResponse,
};
pub use secrets::SecretChain;
pub use skill::Skill;
pub use speech::ForecastRenderer;
pub use weather::{DarkSkyClient, ForecastFetcher};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SkillError>;
