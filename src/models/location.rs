//! Location model for registry entries and coordinates

use serde::{Deserialize, Serialize};

/// Geographic coordinate pair
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether latitude and longitude fall inside their valid ranges
    #[cfg(test)]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.2}, {:.2}", self.latitude, self.longitude)
    }
}

/// Named entry of the location registry
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LocationEntry {
    /// Unique human-readable name (district, city)
    pub name: String,
    pub coordinate: Coordinate,
}

impl LocationEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            coordinate: Coordinate::new(latitude, longitude),
        }
    }
}
