//! `heatrisk` - Heat & sun risk checker
//!
//! Combines current temperature, humidity and UV readings for a fixed set of
//! districts into a heat index, a risk level and safety advice.

pub mod advisory;
pub mod api;
pub mod config;
pub mod error;
pub mod heat_index;
pub mod logging;
pub mod models;
pub mod registry;
pub mod risk;
pub mod service;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use advisory::advisories;
pub use config::HeatRiskConfig;
pub use error::HeatRiskError;
pub use heat_index::heat_index;
pub use models::{Coordinate, LocationEntry, RiskAssessment, RiskLevel, RiskReport, WeatherReading};
pub use risk::classify;
pub use service::HeatRiskService;
pub use weather::{OpenMeteoClient, WeatherProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Disclaimer shown under every rendered report
pub const DISCLAIMER: &str =
    "This is a simplified heat risk model using Heat Index + UV. For educational purposes.";

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, HeatRiskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
