//! Error types and handling for the heat risk checker

use thiserror::Error;

/// Main error type for the `heatrisk` library
#[derive(Error, Debug)]
pub enum HeatRiskError {
    /// Requested location is not part of the registry
    #[error("Location not found: {name}")]
    LocationNotFound { name: String },

    /// Network failure, timeout, non-success status or malformed body from the weather API
    #[error("Weather provider unavailable: {message}")]
    WeatherUnavailable { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl HeatRiskError {
    /// Create a new location-not-found error
    pub fn location_not_found<S: Into<String>>(name: S) -> Self {
        Self::LocationNotFound { name: name.into() }
    }

    /// Create a new weather provider error
    pub fn weather<S: Into<String>>(message: S) -> Self {
        Self::WeatherUnavailable {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            HeatRiskError::LocationNotFound { name } => {
                format!("Unknown location '{name}'. Run `heatrisk locations` to see the supported districts.")
            }
            HeatRiskError::WeatherUnavailable { .. } => {
                "Unable to fetch current weather. Please check your internet connection and try again."
                    .to_string()
            }
            HeatRiskError::Config { message } => {
                format!("Configuration error: {message}")
            }
        }
    }
}

impl From<reqwest::Error> for HeatRiskError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HeatRiskError::weather(format!("request timed out: {err}"))
        } else if err.is_decode() {
            HeatRiskError::weather(format!("malformed response: {err}"))
        } else {
            HeatRiskError::weather(err.to_string())
        }
    }
}
