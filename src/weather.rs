//! Weather provider boundary
//!
//! `WeatherProvider` is the seam between the risk computation and the outside world;
//! `OpenMeteoClient` implements it against the free Open-Meteo forecast API (no key).
//! Every request carries a bounded timeout and is attempted exactly once.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

use crate::config::WeatherConfig;
use crate::models::{Coordinate, WeatherReading};
use crate::{HeatRiskError, Result};

/// Source of current conditions for a coordinate
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, coordinate: Coordinate) -> Result<WeatherReading>;
}

/// Open-Meteo `current` conditions client
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

impl OpenMeteoClient {
    /// Create a client with the configured base URL and request timeout
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("heatrisk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HeatRiskError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn current_url(&self, coordinate: Coordinate) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current=temperature_2m,relative_humidity_2m,uv_index",
            self.base_url, coordinate.latitude, coordinate.longitude
        )
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    #[instrument(skip(self))]
    async fn current(&self, coordinate: Coordinate) -> Result<WeatherReading> {
        let url = self.current_url(coordinate);
        debug!("OpenMeteo API request URL: {}", url);
        let start_time = Instant::now();

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Network error calling OpenMeteo: {}", e);
            HeatRiskError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_msg = format!(
                "API request failed with status: {} - {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown error")
            );
            error!("{}", error_msg);
            return Err(HeatRiskError::weather(error_msg));
        }

        let forecast: openmeteo::ForecastResponse = response.json().await.map_err(|e| {
            error!("Failed to parse weather response: {}", e);
            HeatRiskError::weather(format!("Invalid weather data received from OpenMeteo API: {e}"))
        })?;

        let reading = forecast.into_reading()?;

        let total_duration = start_time.elapsed();
        info!(
            temperature_c = reading.temperature_c,
            humidity_pct = reading.humidity_pct,
            uv_index = reading.uv_index,
            "Retrieved current weather in {:.3}s",
            total_duration.as_secs_f64()
        );
        if total_duration.as_secs() > 5 {
            warn!(
                "Slow API response detected: {:.3}s",
                total_duration.as_secs_f64()
            );
        }

        Ok(reading)
    }
}

/// `OpenMeteo` API response structures and conversion utilities
mod openmeteo {
    use chrono::NaiveDateTime;
    use serde::Deserialize;

    use crate::HeatRiskError;
    use crate::models::WeatherReading;

    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub current: Option<CurrentData>,
    }

    /// Current conditions block; each variable may be absent or null
    #[derive(Debug, Deserialize)]
    pub struct CurrentData {
        pub time: Option<String>,
        #[serde(rename = "temperature_2m")]
        pub temperature: Option<f64>,
        #[serde(rename = "relative_humidity_2m")]
        pub relative_humidity: Option<f64>,
        #[serde(default)]
        pub uv_index: Option<f64>,
    }

    impl ForecastResponse {
        pub fn into_reading(self) -> Result<WeatherReading, HeatRiskError> {
            let current = self
                .current
                .ok_or_else(|| HeatRiskError::weather("response has no `current` block"))?;

            let temperature_c = current
                .temperature
                .ok_or_else(|| HeatRiskError::weather("response is missing temperature_2m"))?;
            let humidity_pct = current.relative_humidity.ok_or_else(|| {
                HeatRiskError::weather("response is missing relative_humidity_2m")
            })?;

            let observed_at = current
                .time
                .as_deref()
                .and_then(|t| NaiveDateTime::parse_from_str(t, "%Y-%m-%dT%H:%M").ok());

            Ok(WeatherReading {
                temperature_c,
                humidity_pct,
                uv_index: current.uv_index.unwrap_or(0.0),
                observed_at,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CHENNAI: Coordinate = Coordinate::new(13.08, 80.27);

    fn client_for(server: &MockServer, timeout_seconds: u32) -> OpenMeteoClient {
        OpenMeteoClient::new(&WeatherConfig {
            base_url: format!("{}/v1", server.uri()),
            timeout_seconds,
        })
        .unwrap()
    }

    fn current_body(current: serde_json::Value) -> serde_json::Value {
        json!({
            "latitude": 13.125,
            "longitude": 80.25,
            "timezone": "GMT",
            "current_units": {"temperature_2m": "°C", "relative_humidity_2m": "%", "uv_index": ""},
            "current": current
        })
    }

    #[test]
    fn test_current_url() {
        let client = OpenMeteoClient::new(&WeatherConfig {
            base_url: "https://api.open-meteo.com/v1/".to_string(),
            timeout_seconds: 10,
        })
        .unwrap();
        assert_eq!(
            client.current_url(CHENNAI),
            "https://api.open-meteo.com/v1/forecast?latitude=13.08&longitude=80.27&current=temperature_2m,relative_humidity_2m,uv_index"
        );
    }

    #[tokio::test]
    async fn test_current_weather() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "13.08"))
            .and(query_param("longitude", "80.27"))
            .and(query_param(
                "current",
                "temperature_2m,relative_humidity_2m,uv_index",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(current_body(json!({
                "time": "2026-05-01T12:00",
                "interval": 900,
                "temperature_2m": 35.0,
                "relative_humidity_2m": 60,
                "uv_index": 9.45
            }))))
            .expect(1)
            .mount(&mock_server)
            .await;

        let reading = client_for(&mock_server, 5).current(CHENNAI).await.unwrap();
        assert_eq!(reading.temperature_c, 35.0);
        assert_eq!(reading.humidity_pct, 60.0);
        assert_eq!(reading.uv_index, 9.45);
        assert_eq!(
            reading.observed_at.map(|t| t.to_string()),
            Some("2026-05-01 12:00:00".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_uv_index_defaults_to_zero() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(current_body(json!({
                "time": "2026-05-01T21:00",
                "temperature_2m": 29.1,
                "relative_humidity_2m": 78
            }))))
            .mount(&mock_server)
            .await;

        let reading = client_for(&mock_server, 5).current(CHENNAI).await.unwrap();
        assert_eq!(reading.uv_index, 0.0);
        assert_eq!(reading.temperature_c, 29.1);
    }

    #[tokio::test]
    async fn test_null_uv_index_defaults_to_zero() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(current_body(json!({
                "temperature_2m": 30.0,
                "relative_humidity_2m": 50,
                "uv_index": null
            }))))
            .mount(&mock_server)
            .await;

        let reading = client_for(&mock_server, 5).current(CHENNAI).await.unwrap();
        assert_eq!(reading.uv_index, 0.0);
        assert!(reading.observed_at.is_none());
    }

    #[tokio::test]
    async fn test_server_error_is_weather_unavailable() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server, 5).current(CHENNAI).await.unwrap_err();
        assert!(matches!(err, HeatRiskError::WeatherUnavailable { .. }));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_weather_unavailable() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server, 5).current(CHENNAI).await.unwrap_err();
        assert!(matches!(err, HeatRiskError::WeatherUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_missing_current_block_is_weather_unavailable() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"latitude": 13.125, "longitude": 80.25})),
            )
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server, 5).current(CHENNAI).await.unwrap_err();
        assert!(err.to_string().contains("current"));
    }

    #[tokio::test]
    async fn test_missing_humidity_is_weather_unavailable() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(current_body(json!({
                "temperature_2m": 30.0
            }))))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server, 5).current(CHENNAI).await.unwrap_err();
        assert!(err.to_string().contains("relative_humidity_2m"));
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(current_body(json!({
                        "temperature_2m": 30.0,
                        "relative_humidity_2m": 50
                    })))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server, 1).current(CHENNAI).await.unwrap_err();
        assert!(matches!(err, HeatRiskError::WeatherUnavailable { .. }));
    }
}
