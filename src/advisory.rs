//! Safety advisories per risk level

use crate::models::{AdvisoryList, RiskLevel};

const LOW_TIPS: &[&str] = &["Drink 1–2L water through the day.", "No major heat risk."];

const MODERATE_TIPS: &[&str] = &["Avoid direct sun 12–3 PM.", "Drink ORS if outdoors."];

const HIGH_TIPS: &[&str] = &[
    "Take shade every 20 mins.",
    "Drink 2–3L water.",
    "Avoid strenuous work.",
];

const EXTREME_TIPS: &[&str] = &[
    "Heatstroke likely. DO NOT stay in the sun.",
    "Drink ORS.",
    "Cool yourself immediately.",
    "Seek medical help if dizzy.",
];

/// Ordered safety recommendations for a risk level
#[must_use]
pub fn advisories(level: RiskLevel) -> AdvisoryList {
    let tips = match level {
        RiskLevel::Low => LOW_TIPS,
        RiskLevel::Moderate => MODERATE_TIPS,
        RiskLevel::High => HIGH_TIPS,
        RiskLevel::Extreme => EXTREME_TIPS,
    };

    AdvisoryList { level, tips }
}
