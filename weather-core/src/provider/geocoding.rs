use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use super::{ProviderError, truncate_body};
use crate::model::Coordinates;

const PROVIDER: &str = "geocoding provider";

/// Client for the Open-Meteo geocoding API.
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    http: Client,
    base_url: String,
}

impl GeocodingClient {
    /// `base_url` is the API root without the `/search` suffix, e.g.
    /// `https://geocoding-api.open-meteo.com/v1`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Resolve a place name to coordinates.
    ///
    /// Requests a single English-language match and takes the first result.
    /// Returns `Ok(None)` when the provider knows no such place; that is a
    /// normal outcome, distinct from a transport or parse failure.
    pub async fn resolve(&self, place: &str) -> Result<Option<Coordinates>, ProviderError> {
        info!("Resolving coordinates for place: {place}");

        let url = format!("{}/search", self.base_url);
        let res = self
            .http
            .get(&url)
            .query(&[
                ("name", place),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
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

        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|err| ProviderError::Parse {
                provider: PROVIDER,
                detail: err.to_string(),
            })?;

        let Some(first) = parsed.results.into_iter().next() else {
            debug!("No geocoding results for place: {place}");
            return Ok(None);
        };

        debug!(
            "Resolved '{place}' to {}, {} ({}, {})",
            first.name, first.country, first.latitude, first.longitude
        );

        Ok(Some(Coordinates {
            latitude: first.latitude,
            longitude: first.longitude,
            name: first.name,
            country: first.country,
        }))
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    latitude: f64,
    longitude: f64,
    name: String,
    // Some matches (e.g. oceans) carry no country.
    #[serde(default)]
    country: String,
}
