use crate::Result;
use crate::models::{Coordinates, ForecastDocument};

pub mod dark_sky;

pub use dark_sky::DarkSkyClient;

/// Source of raw forecast documents.
///
/// Implementations block until the forecast is available.
pub trait ForecastFetcher: Send + Sync {
    fn fetch(&self, coordinates: Coordinates) -> Result<ForecastDocument>;
}

impl<F> ForecastFetcher for F
where
    F: Fn(Coordinates) -> Result<ForecastDocument> + Send + Sync,
{
    fn fetch(&self, coordinates: Coordinates) -> Result<ForecastDocument> {
        self(coordinates)
    }
}
