use reqwest::Client;
use tracing::{debug, info};

use super::{ProviderError, truncate_body};
use crate::{
    model::WeatherData,
    shape::{self, ForecastPayload},
};

const PROVIDER: &str = "forecast provider";

const HOURLY_FIELDS: &str = "temperature_2m,precipitation,weathercode";
const DAILY_FIELDS: &str = "weathercode,temperature_2m_max,temperature_2m_min";

/// Client for the Open-Meteo forecast API.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: Client,
    base_url: String,
}

impl ForecastClient {
    /// `base_url` is the API root without the `/forecast` suffix, e.g.
    /// `https://api.open-meteo.com/v1`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the forecast for a coordinate pair and reshape it into the
    /// simplified current/hourly/daily views.
    ///
    /// Coordinates are taken as produced by the geocoding provider; no range
    /// validation happens here. The provider derives the timezone from them.
    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Result<WeatherData, ProviderError> {
        info!("Fetching forecast for coordinates: {latitude}, {longitude}");

        let url = format!("{}/forecast", self.base_url);
        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string().as_str()),
                ("longitude", longitude.to_string().as_str()),
                ("hourly", HOURLY_FIELDS),
                ("daily", DAILY_FIELDS),
                ("timezone", "auto"),
            ])
            .send()
            .await
            .map_err(|source| ProviderError::Request {
                provider: PROVIDER,
                source,
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|source| ProviderError::Request {
            provider: PROVIDER,
            source,
        })?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                provider: PROVIDER,
                status,
                body: truncate_body(&body),
            });
        }

        let payload: ForecastPayload =
            serde_json::from_str(&body).map_err(|err| ProviderError::Parse {
                provider: PROVIDER,
                detail: err.to_string(),
            })?;

        let data = WeatherData {
            current: shape::current(&payload),
            hourly: shape::hourly(&payload),
            daily: shape::daily(&payload),
        };

        debug!(
            "Forecast fetched: {} hourly and {} daily entries",
            data.hourly.len(),
            data.daily.len()
        );

        Ok(data)
    }
}
