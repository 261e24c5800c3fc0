//! Shaping of the raw forecast payload into the simplified views.
//!
//! The provider groups its data as parallel, time-indexed arrays under
//! `hourly` and `daily`. The functions here flatten those into one record per
//! index. They are total over any payload that deserialized: every non-`time`
//! array is read with the same rule, so a missing or short array yields
//! `None` for the affected elements instead of shifting indices.

use serde::Deserialize;

use crate::model::{CurrentWeather, DailyWeather, HourlyWeather};

/// Raw forecast provider response, as far as this service reads it.
#[derive(Debug, Default, Deserialize)]
pub struct ForecastPayload {
    pub hourly: Option<HourlySeries>,
    pub daily: Option<DailySeries>,
}

/// Parallel hourly arrays. All optional: the provider omits what wasn't asked for.
#[derive(Debug, Default, Deserialize)]
pub struct HourlySeries {
    pub time: Option<Vec<String>>,
    pub temperature_2m: Option<Vec<f64>>,
    pub precipitation: Option<Vec<f64>>,
    pub weathercode: Option<Vec<i64>>,
}

/// Parallel daily arrays.
#[derive(Debug, Default, Deserialize)]
pub struct DailySeries {
    pub time: Option<Vec<String>>,
    pub temperature_2m_max: Option<Vec<f64>>,
    pub temperature_2m_min: Option<Vec<f64>>,
    pub weathercode: Option<Vec<i64>>,
}

/// Element `index` of an optional series, or `None` if the series is absent
/// or too short.
fn series_at<T: Copy>(series: Option<&Vec<T>>, index: usize) -> Option<T> {
    series.and_then(|values| values.get(index)).copied()
}

/// Conditions "now": index 0 of the hourly series.
///
/// Returns `None` when the hourly temperature series is absent or empty.
pub fn current(payload: &ForecastPayload) -> Option<CurrentWeather> {
    let hourly = payload.hourly.as_ref()?;
    let temperature = *hourly.temperature_2m.as_ref()?.first()?;

    Some(CurrentWeather {
        temperature,
        weather_code: series_at(hourly.weathercode.as_ref(), 0),
        precipitation: series_at(hourly.precipitation.as_ref(), 0),
        time: hourly
            .time
            .as_ref()
            .and_then(|times| times.first())
            .cloned(),
    })
}

/// One record per element of `hourly.time`; empty when the series is absent.
pub fn hourly(payload: &ForecastPayload) -> Vec<HourlyWeather> {
    let Some(block) = payload.hourly.as_ref() else {
        return Vec::new();
    };
    let Some(times) = block.time.as_ref() else {
        return Vec::new();
    };

    times
        .iter()
        .enumerate()
        .map(|(i, time)| HourlyWeather {
            time: time.clone(),
            temperature: series_at(block.temperature_2m.as_ref(), i),
            weather_code: series_at(block.weathercode.as_ref(), i),
            precipitation: series_at(block.precipitation.as_ref(), i),
        })
        .collect()
}

/// One record per element of `daily.time`; empty when the series is absent.
pub fn daily(payload: &ForecastPayload) -> Vec<DailyWeather> {
    let Some(block) = payload.daily.as_ref() else {
        return Vec::new();
    };
    let Some(times) = block.time.as_ref() else {
        return Vec::new();
    };

    times
        .iter()
        .enumerate()
        .map(|(i, date)| DailyWeather {
            date: date.clone(),
            max_temperature: series_at(block.temperature_2m_max.as_ref(), i),
            min_temperature: series_at(block.temperature_2m_min.as_ref(), i),
            weather_code: series_at(block.weathercode.as_ref(), i),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: serde_json::Value) -> ForecastPayload {
        serde_json::from_value(json).expect("payload must deserialize")
    }

    #[test]
    fn current_is_none_for_empty_temperature_series() {
        let raw = payload(serde_json::json!({"hourly": {"temperature_2m": []}}));
        assert_eq!(current(&raw), None);
    }

    #[test]
    fn current_is_none_without_hourly_block() {
        assert_eq!(current(&ForecastPayload::default()), None);
    }

    #[test]
    fn current_substitutes_null_for_missing_arrays() {
        let raw = payload(serde_json::json!({
            "hourly": {"temperature_2m": [5.0], "time": ["t0"]}
        }));

        assert_eq!(
            current(&raw),
            Some(CurrentWeather {
                temperature: 5.0,
                weather_code: None,
                precipitation: None,
                time: Some("t0".to_string()),
            })
        );
    }

    #[test]
    fn current_takes_index_zero_of_every_series() {
        let raw = payload(serde_json::json!({
            "hourly": {
                "time": ["t0", "t1"],
                "temperature_2m": [1.5, 2.5],
                "precipitation": [0.0, 0.3],
                "weathercode": [2, 3]
            }
        }));

        assert_eq!(
            current(&raw),
            Some(CurrentWeather {
                temperature: 1.5,
                weather_code: Some(2),
                precipitation: Some(0.0),
                time: Some("t0".to_string()),
            })
        );
    }

    #[test]
    fn hourly_is_empty_without_time_series() {
        let raw = payload(serde_json::json!({"hourly": {"temperature_2m": [1.0]}}));
        assert!(hourly(&raw).is_empty());
        assert!(hourly(&ForecastPayload::default()).is_empty());
    }

    #[test]
    fn hourly_substitutes_null_per_element_for_missing_arrays() {
        let raw = payload(serde_json::json!({
            "hourly": {"time": ["t0", "t1"], "temperature_2m": [1.0, 2.0]}
        }));

        assert_eq!(
            hourly(&raw),
            vec![
                HourlyWeather {
                    time: "t0".to_string(),
                    temperature: Some(1.0),
                    weather_code: None,
                    precipitation: None,
                },
                HourlyWeather {
                    time: "t1".to_string(),
                    temperature: Some(2.0),
                    weather_code: None,
                    precipitation: None,
                },
            ]
        );
    }

    #[test]
    fn hourly_tolerates_missing_temperature_series() {
        let raw = payload(serde_json::json!({"hourly": {"time": ["t0", "t1"]}}));

        let entries = hourly(&raw);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.temperature.is_none()));
        assert!(entries.iter().all(|e| e.weather_code.is_none()));
    }

    #[test]
    fn hourly_preserves_index_alignment_for_short_arrays() {
        // precipitation has fewer elements than time; the tail must be None
        // without shifting earlier indices.
        let raw = payload(serde_json::json!({
            "hourly": {
                "time": ["t0", "t1", "t2"],
                "temperature_2m": [1.0, 2.0, 3.0],
                "precipitation": [0.1]
            }
        }));

        let entries = hourly(&raw);
        assert_eq!(entries[0].precipitation, Some(0.1));
        assert_eq!(entries[1].precipitation, None);
        assert_eq!(entries[2].precipitation, None);
        assert_eq!(entries[2].temperature, Some(3.0));
    }

    #[test]
    fn daily_is_empty_without_time_series() {
        assert!(daily(&ForecastPayload::default()).is_empty());
    }

    #[test]
    fn daily_produces_one_record_per_date() {
        let raw = payload(serde_json::json!({
            "daily": {
                "time": ["d0"],
                "temperature_2m_max": [10.0],
                "temperature_2m_min": [2.0],
                "weathercode": [3]
            }
        }));

        assert_eq!(
            daily(&raw),
            vec![DailyWeather {
                date: "d0".to_string(),
                max_temperature: Some(10.0),
                min_temperature: Some(2.0),
                weather_code: Some(3),
            }]
        );
    }

    #[test]
    fn daily_tolerates_missing_value_arrays() {
        let raw = payload(serde_json::json!({"daily": {"time": ["d0"]}}));

        assert_eq!(
            daily(&raw),
            vec![DailyWeather {
                date: "d0".to_string(),
                max_temperature: None,
                min_temperature: None,
                weather_code: None,
            }]
        );
    }
}
