//! Fixed registry of supported locations
//!
//! The table is built once on first access and never mutated.

use std::sync::LazyLock;

use crate::models::{Coordinate, LocationEntry};
use crate::{HeatRiskError, Result};

static DISTRICTS: LazyLock<Vec<LocationEntry>> = LazyLock::new(|| {
    vec![
        LocationEntry::new("Chennai", 13.08, 80.27),
        LocationEntry::new("Coimbatore", 11.01, 76.96),
        LocationEntry::new("Madurai", 9.93, 78.12),
        LocationEntry::new("Thoothukudi", 8.76, 78.13),
        LocationEntry::new("Erode", 11.34, 77.72),
        LocationEntry::new("Tirunelveli", 8.73, 77.71),
        LocationEntry::new("Trichy", 10.79, 78.68),
    ]
});

/// All registry entries in insertion order
#[must_use]
pub fn entries() -> &'static [LocationEntry] {
    &DISTRICTS
}

/// Registry names in insertion order
#[must_use]
pub fn list_locations() -> Vec<&'static str> {
    DISTRICTS.iter().map(|entry| entry.name.as_str()).collect()
}

/// Find an entry by name.
///
/// Exact match on the trimmed name wins; otherwise an ASCII case-insensitive match is tried.
pub fn find(name: &str) -> Result<&'static LocationEntry> {
    let wanted = name.trim();

    DISTRICTS
        .iter()
        .find(|entry| entry.name == wanted)
        .or_else(|| {
            DISTRICTS
                .iter()
                .find(|entry| entry.name.eq_ignore_ascii_case(wanted))
        })
        .ok_or_else(|| HeatRiskError::location_not_found(wanted))
}

/// Coordinate for a registry name
pub fn lookup(name: &str) -> Result<Coordinate> {
    find(name).map(|entry| entry.coordinate)
}
