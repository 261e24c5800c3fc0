//! Clients for the two upstream providers: geocoding and forecast.

use thiserror::Error;

pub mod forecast;
pub mod geocoding;

/// Failure talking to an upstream provider.
///
/// A place that yields no geocoding match is not an error; see
/// [`geocoding::GeocodingClient::resolve`].
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request never produced a response.
    #[error("Failed to send request to {provider}: {source}")]
    Request {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success status code.
    #[error("{provider} request failed with status {status}: {body}")]
    Status {
        provider: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body could not be read or was not the expected JSON.
    #[error("Failed to parse {provider} response: {detail}")]
    Parse {
        provider: &'static str,
        detail: String,
    },
}

/// Cap provider response bodies quoted in error messages.
fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
