//! HTTP surface: `/health` and `/retrieve-data`.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use weather_core::{Config, Coordinates, ForecastClient, GeocodingClient, ProviderError, WeatherData};

/// Shared state for HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub geocoding: GeocodingClient,
    pub forecast: ForecastClient,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            geocoding: GeocodingClient::new(&config.geocoding_url),
            forecast: ForecastClient::new(&config.forecast_url),
        }
    }
}

/// JSON response for the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
}

/// JSON response for a successful place lookup.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrieveResponse {
    pub status: &'static str,
    pub place: String,
    pub coordinates: Coordinates,
    pub weather_data: WeatherData,
}

/// JSON error envelope. The `error` field is only present on provider
/// failures, where it carries the raw error text.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Query params for `/retrieve-data`.
#[derive(Debug, Deserialize)]
pub struct RetrieveQuery {
    pub place: Option<String>,
}

/// GET /health - static liveness info.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Service is running",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// GET /retrieve-data?place=<name> - geocode the place, then fetch and
/// reshape its forecast.
async fn retrieve_data(
    State(state): State<AppState>,
    Query(query): Query<RetrieveQuery>,
) -> Response {
    let Some(place) = query.place.filter(|p| !p.is_empty()) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Missing required parameter: place".to_string(),
        );
    };

    let coordinates = match state.geocoding.resolve(&place).await {
        Ok(Some(coordinates)) => coordinates,
        Ok(None) => {
            return error_response(
                StatusCode::NOT_FOUND,
                format!("Could not find coordinates for: {place}"),
            );
        }
        Err(err) => return provider_error_response(err),
    };

    match state
        .forecast
        .fetch(coordinates.latitude, coordinates.longitude)
        .await
    {
        Ok(weather_data) => (
            StatusCode::OK,
            Json(RetrieveResponse {
                status: "success",
                place,
                coordinates,
                weather_data,
            }),
        )
            .into_response(),
        Err(err) => provider_error_response(err),
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (
        status,
        Json(ErrorResponse {
            status: "error",
            message,
            error: None,
        }),
    )
        .into_response()
}

fn provider_error_response(err: ProviderError) -> Response {
    tracing::error!("Error fetching weather data: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            status: "error",
            message: "Failed to retrieve weather data".to_string(),
            error: Some(err.to_string()),
        }),
    )
        .into_response()
}

/// Create the HTTP router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/retrieve-data", get(retrieve_data))
        .layer(cors)
        .with_state(state)
}
