use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde_json::json;

use crate::{HeatRiskError, models::RiskReport, service::HeatRiskService};

/// JSON error body with a status derived from the error kind
pub struct ApiError(HeatRiskError);

impl From<HeatRiskError> for ApiError {
    fn from(err: HeatRiskError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            HeatRiskError::LocationNotFound { .. } => StatusCode::NOT_FOUND,
            HeatRiskError::WeatherUnavailable { .. } => StatusCode::BAD_GATEWAY,
            HeatRiskError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!("API error {}: {}", status, self.0);
        (status, Json(json!({ "error": self.0.user_message() }))).into_response()
    }
}

pub fn router(service: Arc<HeatRiskService>) -> Router {
    Router::new()
        .route("/locations", get(get_locations))
        .route("/risk/{name}", get(get_risk))
        .with_state(service)
}

async fn get_locations(State(service): State<Arc<HeatRiskService>>) -> Json<Vec<&'static str>> {
    Json(service.list_locations())
}

async fn get_risk(
    State(service): State<Arc<HeatRiskService>>,
    Path(name): Path<String>,
) -> Result<Json<RiskReport>, ApiError> {
    let report = service.compute_risk(&name).await?;
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            ApiError::from(HeatRiskError::location_not_found("x")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(HeatRiskError::weather("down")).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::from(HeatRiskError::config("bad")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
