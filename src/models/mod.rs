//! Data models for the weather skill
//!
//! This module contains the core domain models organized by concern:
//! - Forecast: the raw forecast document returned by the weather API
//! - Location: known locations and their coordinates
//! - Session: the attribute bag carried between turns
//! - Envelope: request and response envelopes of the voice platform

pub mod envelope;
pub mod forecast;
pub mod location;
pub mod session;

// Re-export all public types for convenient access
pub use envelope::{Intent, Request, SkillRequest, SkillResponse, Speechlet};
pub use forecast::ForecastDocument;
pub use location::{Coordinates, LocationTable};
pub use session::SessionAttributes;
