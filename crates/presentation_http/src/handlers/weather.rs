//! Weather summary handler
//!
//! `GET /?lat=<float>&lon=<float>` → `{"temperature": "...", "forecast": "..."}`

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::{Method, StatusCode},
    response::Response,
};
use domain::{Coordinate, LATITUDE_PARAM, LONGITUDE_PARAM, TemperatureClass, WeatherSummary};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, handlers::common::json_response, state::AppState};

/// Successful response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherResponse {
    /// Temperature label: Cold, Moderate or Hot
    pub temperature: TemperatureClass,
    /// Short forecast text
    pub forecast: String,
}

impl From<WeatherSummary> for WeatherResponse {
    fn from(summary: WeatherSummary) -> Self {
        Self {
            temperature: summary.temperature,
            forecast: summary.forecast,
        }
    }
}

/// Summarize the current forecast for a coordinate
///
/// GET /
#[instrument(skip_all)]
pub async fn get_weather(
    method: Method,
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, ApiError> {
    // HEAD is routed here by axum; only GET is served.
    if method != Method::GET {
        return Err(ApiError::NotFound);
    }

    let Query(params) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let coordinate = Coordinate::from_query(
        first_value(&params, LATITUDE_PARAM),
        first_value(&params, LONGITUDE_PARAM),
    )?;

    let summary = state.weather_service.summarize(&coordinate).await?;

    json_response(StatusCode::OK, &WeatherResponse::from(summary))
}

/// First value for `key`, mirroring URL query `get` semantics
fn first_value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
