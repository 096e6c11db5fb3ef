//! Known locations and their geographic coordinates

use crate::{Result, SkillError};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Location coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl FromStr for Coordinates {
    type Err = SkillError;

    /// Parse a `latitude,longitude` pair
    fn from_str(s: &str) -> Result<Self> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| SkillError::config(format!("Expected 'lat,long' but got '{s}'")))?;

        let latitude: f64 = lat
            .trim()
            .parse()
            .map_err(|_| SkillError::config(format!("Invalid latitude in '{s}'")))?;
        let longitude: f64 = lon
            .trim()
            .parse()
            .map_err(|_| SkillError::config(format!("Invalid longitude in '{s}'")))?;

        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(SkillError::config(format!("Coordinates out of range: '{s}'")));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Read-only table mapping lowercase location names to coordinates
#[derive(Debug, Clone, Default)]
pub struct LocationTable {
    positions: BTreeMap<String, Coordinates>,
}

impl LocationTable {
    /// Build a table from name/coordinate pairs.
    ///
    /// Names are lowercased; two names that collide after lowercasing are
    /// rejected, as is any coordinate string that does not parse.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut positions = BTreeMap::new();
        for (name, coordinates) in pairs {
            let key = name.as_ref().trim().to_lowercase();
            let coordinates: Coordinates = coordinates.as_ref().parse()?;
            if positions.insert(key.clone(), coordinates).is_some() {
                return Err(SkillError::config(format!("Duplicate location '{key}'")));
            }
        }
        Ok(Self { positions })
    }

    /// Load the table from a JSON object file such as `{"home": "41.87,-87.62"}`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            SkillError::config(format!("Failed to read locations file {}: {e}", path.display()))
        })?;
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&json)
            .map_err(|e| SkillError::config(format!("Invalid locations file: {e}")))?;

        let mut pairs = Vec::with_capacity(raw.len());
        for (name, value) in raw {
            let coordinates = value.as_str().ok_or_else(|| {
                SkillError::config(format!("Coordinates for '{name}' must be a string"))
            })?;
            pairs.push((name, coordinates.to_string()));
        }

        let table = Self::from_pairs(pairs)?;
        tracing::info!("Loaded {} locations from {}", table.len(), path.display());
        Ok(table)
    }

    /// Coordinates for a location name, matched case-insensitively
    #[must_use]
    pub fn coordinates(&self, name: &str) -> Option<Coordinates> {
        self.positions.get(&name.to_lowercase()).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.coordinates(name).is_some()
    }

    /// All location names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_coordinates() {
        let coords: Coordinates = "41.8781, -87.6298".parse().unwrap();
        assert_eq!(coords.latitude, 41.8781);
        assert_eq!(coords.longitude, -87.6298);
        assert_eq!(coords.to_string(), "41.8781,-87.6298");
    }

    #[test]
    fn test_reject_bad_coordinates() {
        assert!("41.8781".parse::<Coordinates>().is_err());
        assert!("north,-87.6".parse::<Coordinates>().is_err());
        assert!("91.0,10.0".parse::<Coordinates>().is_err());
        assert!("10.0,181.0".parse::<Coordinates>().is_err());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = LocationTable::from_pairs([("Home", "41.8781,-87.6298")]).unwrap();
        assert!(table.contains("HOME"));
        assert_eq!(table.coordinates("home").unwrap().latitude, 41.8781);
        assert!(table.coordinates("office").is_none());
    }

    #[test]
    fn test_names_are_sorted() {
        let table = LocationTable::from_pairs([
            ("work", "41.88,-87.63"),
            ("cabin", "45.0,-89.0"),
            ("home", "41.87,-87.62"),
        ])
        .unwrap();
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["cabin", "home", "work"]);
    }

    #[test]
    fn test_names_colliding_after_lowercasing_are_rejected() {
        let result = LocationTable::from_pairs([("Home", "41.0,-87.0"), ("home", "42.0,-88.0")]);
        assert!(matches!(result, Err(SkillError::Config { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"home": "41.8781,-87.6298", "Lake": "42.0,-87.5"}"#)
            .unwrap();

        let table = LocationTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.contains("lake"));
    }

    #[test]
    fn test_load_rejects_non_string_values() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"home": [41.8781, -87.6298]}"#).unwrap();

        assert!(LocationTable::load(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let result = LocationTable::load("nonexistent_positions.json");
        assert!(matches!(result, Err(SkillError::Config { .. })));
    }
}
