//! Heat risk service
//!
//! Runs the fetch, compute, classify and advise chain for a registry location.
//! Nothing is cached between calls; every request fetches fresh conditions.

use tracing::{debug, info, instrument, warn};

use crate::advisory::advisories;
use crate::heat_index::heat_index;
use crate::models::{LocationEntry, RiskReport, WeatherReading};
use crate::registry;
use crate::risk::classify;
use crate::weather::WeatherProvider;
use crate::Result;

/// Entry point used by the CLI and the HTTP API
pub struct HeatRiskService {
    provider: Box<dyn WeatherProvider>,
}

impl HeatRiskService {
    #[must_use]
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Names the caller may pass to [`HeatRiskService::compute_risk`], in registry order
    #[must_use]
    pub fn list_locations(&self) -> Vec<&'static str> {
        registry::list_locations()
    }

    /// Fetch current conditions for `name` and derive its heat risk report.
    ///
    /// # Errors
    /// `LocationNotFound` for names outside the registry, `WeatherUnavailable` when the
    /// provider fails. Provider errors are passed through unchanged.
    #[instrument(skip(self))]
    pub async fn compute_risk(&self, name: &str) -> Result<RiskReport> {
        let entry = registry::find(name)?;
        self.compute_for(entry).await
    }

    /// Compute reports for every registry location, one after another.
    ///
    /// A failure for one location does not stop the others.
    pub async fn compute_all(&self) -> Vec<(&'static str, Result<RiskReport>)> {
        let mut results = Vec::new();

        for entry in registry::entries() {
            let result = self.compute_for(entry).await;
            if let Err(e) = &result {
                warn!("Heat risk for {} failed: {}", entry.name, e);
            }
            results.push((entry.name.as_str(), result));
        }

        results
    }

    async fn compute_for(&self, entry: &LocationEntry) -> Result<RiskReport> {
        debug!(
            "Resolved {} to {}",
            entry.name,
            entry.coordinate.format_coordinates()
        );

        let reading = self.provider.current(entry.coordinate).await?;
        let report = assess(entry, &reading);

        info!(
            location = %report.location,
            heat_index_c = report.heat_index_c,
            level = %report.level,
            "Computed heat risk"
        );
        Ok(report)
    }
}

/// Pure part of the chain: heat index, classification and advisories for one reading.
/// UV is carried through for display only.
#[must_use]
pub fn assess(entry: &LocationEntry, reading: &WeatherReading) -> RiskReport {
    let heat_index_c = heat_index(reading.temperature_c, reading.humidity_pct);
    let assessment = classify(heat_index_c);
    let advisory = advisories(assessment.level);

    RiskReport::new(entry, reading, heat_index_c, assessment, &advisory)
}
