//! Core library for the weather data service.
//!
//! This crate defines:
//! - Service configuration (listen port, provider base URLs)
//! - Clients for the geocoding and forecast providers
//! - Shared domain models and the forecast shaping functions
//!
//! It is used by `weather-server`, but can also be reused by other binaries or services.

pub mod config;
pub mod model;
pub mod provider;
pub mod shape;

pub use config::Config;
pub use model::{Coordinates, CurrentWeather, DailyWeather, HourlyWeather, WeatherData};
pub use provider::{ProviderError, forecast::ForecastClient, geocoding::GeocodingClient};
