//! Risk classification of heat index values
//!
//! Brackets are half-open; a value sitting exactly on a threshold belongs to the
//! higher bracket.

use crate::models::{RiskAssessment, RiskLevel};

/// Lower bound (inclusive) of the Moderate bracket, °C
pub const MODERATE_THRESHOLD_C: f64 = 30.0;
/// Lower bound (inclusive) of the High bracket, °C
pub const HIGH_THRESHOLD_C: f64 = 40.0;
/// Lower bound (inclusive) of the Extreme bracket, °C
pub const EXTREME_THRESHOLD_C: f64 = 54.0;

/// Map a heat index in °C to its risk level and label.
///
/// Total over `f64`: NaN compares false against every threshold and lands in Extreme.
#[must_use]
pub fn classify(heat_index_c: f64) -> RiskAssessment {
    let level = if heat_index_c < MODERATE_THRESHOLD_C {
        RiskLevel::Low
    } else if heat_index_c < HIGH_THRESHOLD_C {
        RiskLevel::Moderate
    } else if heat_index_c < EXTREME_THRESHOLD_C {
        RiskLevel::High
    } else {
        RiskLevel::Extreme
    };

    RiskAssessment::from(level)
}
