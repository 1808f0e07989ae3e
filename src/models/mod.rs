//! Data models for the heat risk checker
//!
//! This module contains the core domain models organized by concern:
//! - Location: Registry entries and their coordinates
//! - Weather: A single current reading from the weather provider
//! - Risk: Risk levels, assessments, advisories and the assembled report

pub mod location;
pub mod risk;
pub mod weather;

// Re-export all public types for convenient access
pub use location::{Coordinate, LocationEntry};
pub use risk::{AdvisoryList, RiskAssessment, RiskLevel, RiskReport};
pub use weather::WeatherReading;
