//! Weather reading model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Current conditions at one coordinate, as reported by the weather provider
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherReading {
    /// Air temperature at 2 m in Celsius
    pub temperature_c: f64,
    /// Relative humidity at 2 m in percent (0-100)
    pub humidity_pct: f64,
    /// UV index, 0 when the provider omits it
    pub uv_index: f64,
    /// Provider's observation time (local to the location), if reported
    pub observed_at: Option<NaiveDateTime>,
}

impl WeatherReading {
    #[must_use]
    pub fn new(temperature_c: f64, humidity_pct: f64, uv_index: f64) -> Self {
        Self {
            temperature_c,
            humidity_pct,
            uv_index,
            observed_at: None,
        }
    }
}
