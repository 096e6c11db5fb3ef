//! Location Resolution Module
//!
//! This module maps the location a user asked about onto known coordinates
//! and finds the forecast to speak, preferring the one cached in the session.

use crate::Result;
use crate::models::{Coordinates, ForecastDocument, LocationTable, SessionAttributes};
use crate::weather::ForecastFetcher;
use tracing::debug;

/// Outcome of looking up a requested location
#[derive(Debug, Clone, PartialEq)]
pub enum LocationLookup {
    /// The request did not name a location
    Missing,
    /// The named location is not in the table
    Unknown { name: String },
    /// The named location and where it is
    Known {
        name: String,
        coordinates: Coordinates,
    },
}

/// Service for resolving requested locations and their forecasts
pub struct LocationResolver {
    locations: LocationTable,
}

impl LocationResolver {
    #[must_use]
    pub fn new(locations: LocationTable) -> Self {
        Self { locations }
    }

    #[must_use]
    pub fn locations(&self) -> &LocationTable {
        &self.locations
    }

    /// Resolve a requested location name, ignoring case
    #[must_use]
    pub fn resolve(&self, requested: Option<&str>) -> LocationLookup {
        let Some(requested) = requested else {
            return LocationLookup::Missing;
        };

        let name = requested.to_lowercase();
        match self.locations.coordinates(&name) {
            Some(coordinates) => {
                debug!(
                    "Resolved location: {} at ({}, {})",
                    name, coordinates.latitude, coordinates.longitude
                );
                LocationLookup::Known { name, coordinates }
            }
            None => {
                debug!("Location not found: {}", name);
                LocationLookup::Unknown { name }
            }
        }
    }

    /// Forecast for the given coordinates.
    ///
    /// A forecast already cached in the session is returned as-is without
    /// looking at which location it was fetched for; only when the session has
    /// none is the fetcher called.
    pub fn forecast(
        &self,
        coordinates: Coordinates,
        session: &SessionAttributes,
        fetcher: &dyn ForecastFetcher,
    ) -> Result<ForecastDocument> {
        if let Some(cached) = session.cached_forecast()? {
            debug!("Using forecast cached in session");
            return Ok(cached);
        }

        debug!("No forecast in session, fetching for {}", coordinates);
        fetcher.fetch(coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SkillError;
    use crate::models::forecast::sample::forecast;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn resolver() -> LocationResolver {
        LocationResolver::new(
            LocationTable::from_pairs([("home", "41.8781,-87.6298"), ("cabin", "45.0,-89.0")])
                .unwrap(),
        )
    }

    #[test]
    fn test_resolve_missing_slot() {
        assert_eq!(resolver().resolve(None), LocationLookup::Missing);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        match resolver().resolve(Some("Cabin")) {
            LocationLookup::Known { name, coordinates } => {
                assert_eq!(name, "cabin");
                assert_eq!(coordinates.latitude, 45.0);
            }
            other => panic!("unexpected lookup {other:?}"),
        }
    }

    #[test]
    fn test_resolve_unknown_location_is_lowercased() {
        assert_eq!(
            resolver().resolve(Some("Narnia")),
            LocationLookup::Unknown {
                name: "narnia".to_string()
            }
        );
    }

    #[test]
    fn test_forecast_fetches_on_empty_session() {
        let calls = AtomicUsize::new(0);
        let fetcher = |_: Coordinates| -> Result<ForecastDocument> {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(forecast("Fresh."))
        };

        let coordinates = resolver().locations().coordinates("home").unwrap();
        let doc = resolver()
            .forecast(coordinates, &SessionAttributes::new(), &fetcher)
            .unwrap();

        assert_eq!(doc.summary(), "Fresh.");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_forecast_prefers_session_cache() {
        let fetcher = |_: Coordinates| -> Result<ForecastDocument> {
            Err(SkillError::api("must not be called"))
        };
        let mut session = SessionAttributes::new();
        session.store_forecast(&forecast("Cached."));

        let coordinates = resolver().locations().coordinates("home").unwrap();
        let doc = resolver().forecast(coordinates, &session, &fetcher).unwrap();
        assert_eq!(doc.summary(), "Cached.");
    }

    #[test]
    fn test_fetch_failure_propagates() {
        let fetcher = |_: Coordinates| -> Result<ForecastDocument> {
            Err(SkillError::api("connection refused"))
        };
        let coordinates = resolver().locations().coordinates("home").unwrap();
        let result = resolver().forecast(coordinates, &SessionAttributes::new(), &fetcher);
        assert!(matches!(result, Err(SkillError::Api { .. })));
    }
}
