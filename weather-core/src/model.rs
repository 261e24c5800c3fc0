use serde::{Deserialize, Serialize};

/// Resolved location: the geocoding provider's top match for a place name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub country: String,
}

/// Conditions right now, taken from index 0 of the hourly series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    pub temperature: f64,
    pub weather_code: Option<i64>,
    pub precipitation: Option<f64>,
    pub time: Option<String>,
}

/// One hourly forecast entry.
///
/// Fields other than `time` are `None` when the provider omitted the
/// corresponding series, or when the series is shorter than `time`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyWeather {
    pub time: String,
    pub temperature: Option<f64>,
    pub weather_code: Option<i64>,
    pub precipitation: Option<f64>,
}

/// One daily forecast entry, same substitution rules as [`HourlyWeather`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyWeather {
    pub date: String,
    pub max_temperature: Option<f64>,
    pub min_temperature: Option<f64>,
    pub weather_code: Option<i64>,
}

/// Combined forecast views returned by the forecast client.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeatherData {
    pub current: Option<CurrentWeather>,
    pub hourly: Vec<HourlyWeather>,
    pub daily: Vec<DailyWeather>,
}
