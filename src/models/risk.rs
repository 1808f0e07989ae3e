//! Risk level, assessment and report models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{LocationEntry, WeatherReading};

/// Heat-stress severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Extreme,
}

impl RiskLevel {
    /// All levels in ascending severity
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::High,
        RiskLevel::Extreme,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Extreme => "Extreme",
        }
    }

    /// Severity label paired 1:1 with the level
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Safe",
            RiskLevel::Moderate => "Caution",
            RiskLevel::High => "Warning",
            RiskLevel::Extreme => "Danger",
        }
    }

    /// Colour indicator shown next to the label
    #[must_use]
    pub fn indicator(&self) -> &'static str {
        match self {
            RiskLevel::Low => "🟢",
            RiskLevel::Moderate => "🟡",
            RiskLevel::High => "🟠",
            RiskLevel::Extreme => "🔴",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a heat index value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub label: &'static str,
}

impl From<RiskLevel> for RiskAssessment {
    fn from(level: RiskLevel) -> Self {
        Self {
            level,
            label: level.label(),
        }
    }
}

/// Safety recommendations for one risk level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryList {
    pub level: RiskLevel,
    pub tips: &'static [&'static str],
}

/// Everything computed for one location in a single fetch-and-compute cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub uv_index: f64,
    /// Heat index in Celsius, rounded to one decimal
    pub heat_index_c: f64,
    pub level: RiskLevel,
    pub label: String,
    pub indicator: String,
    pub tips: Vec<String>,
    /// Provider's observation time, local to the location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<NaiveDateTime>,
}

impl RiskReport {
    /// Assemble a report from its already-computed parts
    #[must_use]
    pub fn new(
        entry: &LocationEntry,
        reading: &WeatherReading,
        heat_index_c: f64,
        assessment: RiskAssessment,
        advisory: &AdvisoryList,
    ) -> Self {
        Self {
            location: entry.name.clone(),
            latitude: entry.coordinate.latitude,
            longitude: entry.coordinate.longitude,
            temperature_c: reading.temperature_c,
            humidity_pct: reading.humidity_pct,
            uv_index: reading.uv_index,
            heat_index_c,
            level: assessment.level,
            label: assessment.label.to_string(),
            indicator: assessment.level.indicator().to_string(),
            tips: advisory.tips.iter().map(|tip| (*tip).to_string()).collect(),
            observed_at: reading.observed_at,
        }
    }

    /// Render the report as plain text for terminal output
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = format!("Location: {}\n", self.location);
        if let Some(observed_at) = self.observed_at {
            output.push_str(&format!("Observed: {}\n", observed_at.format("%Y-%m-%d %H:%M")));
        }
        output.push_str(&format!("Temperature: {}°C\n", self.temperature_c));
        output.push_str(&format!("Humidity: {}%\n", self.humidity_pct));
        output.push_str(&format!("UV Index: {}\n", self.uv_index));
        output.push_str(&format!("Heat Index: {:.1}°C\n", self.heat_index_c));
        output.push_str(&format!(
            "Risk Level: {} {} ({})\n",
            self.indicator, self.level, self.label
        ));
        output.push_str("\nSafety Tips:\n");
        for tip in &self.tips {
            output.push_str(&format!("  - {tip}\n"));
        }
        output
    }
}
