//! OpenWeatherMap client
//!
//! Requests metric units explicitly and validates the presence of the
//! expected fields before mapping a response into the internal shape.

use serde::Deserialize;

use super::{ForecastPeriod, WeatherReport};
use crate::config::WeatherConfig;
use crate::fetch::{FetchError, REQUEST_TIMEOUT};

/// Raw current-conditions payload; every field optional so shape
/// validation stays explicit
#[derive(Debug, Deserialize)]
struct CurrentPayload {
    name: Option<String>,
    sys: Option<SysPayload>,
    main: Option<MainPayload>,
    weather: Option<Vec<ConditionPayload>>,
    wind: Option<WindPayload>,
    visibility: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SysPayload {
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MainPayload {
    temp: Option<f64>,
    feels_like: Option<f64>,
    humidity: Option<u32>,
    pressure: Option<u32>,
    temp_max: Option<f64>,
    temp_min: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ConditionPayload {
    description: Option<String>,
    icon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WindPayload {
    speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ForecastPayload {
    list: Option<Vec<ForecastEntry>>,
}

#[derive(Debug, Deserialize)]
struct ForecastEntry {
    dt: Option<i64>,
    main: Option<MainPayload>,
    weather: Option<Vec<ConditionPayload>>,
}

/// HTTP client for the weather endpoints
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    /// Build a client from configuration. Returns None when no API key
    /// is available, which puts the widget in demo mode.
    pub fn from_config(config: &WeatherConfig, override_key: Option<String>) -> Option<Self> {
        let api_key = override_key.or_else(|| config.api_key.clone())?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .ok()?;
        Some(Self {
            http,
            base_url: config.base_url.clone(),
            api_key,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
    ) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self
            .http
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(|e| FetchError::from_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::from_status(status.as_u16()));
        }

        response.json().await.map_err(|_| FetchError::InvalidShape)
    }

    /// Fetch current conditions for a city
    pub async fn current(&self, city: &str) -> Result<WeatherReport, FetchError> {
        let payload: CurrentPayload = self.get_json("weather", city).await?;
        map_current(payload, city)
    }

    /// Fetch the 5-period forecast for a city
    pub async fn forecast(&self, city: &str) -> Result<Vec<ForecastPeriod>, FetchError> {
        let payload: ForecastPayload = self.get_json("forecast", city).await?;
        map_forecast(payload)
    }
}

fn round(value: f64) -> i32 {
    value.round() as i32
}

/// Map a current-conditions payload, rejecting responses missing the
/// expected fields
fn map_current(payload: CurrentPayload, city: &str) -> Result<WeatherReport, FetchError> {
    let main = payload.main.ok_or(FetchError::InvalidShape)?;
    let condition = payload
        .weather
        .and_then(|mut w| if w.is_empty() { None } else { Some(w.remove(0)) })
        .ok_or(FetchError::InvalidShape)?;
    let temp = main.temp.ok_or(FetchError::InvalidShape)?;

    Ok(WeatherReport {
        location: payload.name.unwrap_or_else(|| city.to_string()),
        country: payload
            .sys
            .and_then(|s| s.country)
            .unwrap_or_else(|| "Unknown".to_string()),
        temperature: round(temp),
        description: condition.description.unwrap_or_else(|| "Unknown".to_string()),
        humidity: main.humidity.unwrap_or(0),
        // m/s to km/h
        wind_speed: round(payload.wind.and_then(|w| w.speed).unwrap_or(0.0) * 3.6),
        pressure: main.pressure.unwrap_or(0),
        // metres to km
        visibility: round(payload.visibility.unwrap_or(0.0) / 1000.0),
        feels_like: round(main.feels_like.unwrap_or(temp)),
        icon: condition.icon.unwrap_or_else(|| "01d".to_string()),
    })
}

/// Map a forecast payload: every 8th 3-hour entry, at most 5 periods.
/// Entries missing their fields degrade to a placeholder period rather
/// than failing the whole forecast.
fn map_forecast(payload: ForecastPayload) -> Result<Vec<ForecastPeriod>, FetchError> {
    let list = payload.list.ok_or(FetchError::InvalidShape)?;

    let periods = list
        .into_iter()
        .step_by(8)
        .take(5)
        .enumerate()
        .map(|(index, entry)| map_forecast_entry(index, entry))
        .collect();
    Ok(periods)
}

fn map_forecast_entry(index: usize, entry: ForecastEntry) -> ForecastPeriod {
    let label = if index == 0 {
        "Today".to_string()
    } else {
        entry
            .dt
            .and_then(|dt| chrono::DateTime::from_timestamp(dt, 0))
            .map(|dt| dt.format("%a").to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    };

    let (main, condition) = match (entry.main, entry.weather) {
        (Some(main), Some(mut weather)) if !weather.is_empty() => (main, weather.remove(0)),
        _ => {
            return ForecastPeriod {
                label: if index == 0 { "Today".to_string() } else { "Unknown".to_string() },
                high: 20,
                low: 10,
                description: "Unknown".to_string(),
                icon: "01d".to_string(),
            }
        }
    };

    ForecastPeriod {
        high: round(main.temp_max.or(main.temp).unwrap_or(20.0)),
        low: round(main.temp_min.or(main.temp).unwrap_or(10.0)),
        description: condition.description.unwrap_or_else(|| "Unknown".to_string()),
        icon: condition.icon.unwrap_or_else(|| "01d".to_string()),
        label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_current() -> CurrentPayload {
        serde_json::from_str(
            r#"{
                "name": "London",
                "sys": {"country": "GB"},
                "main": {"temp": 17.4, "feels_like": 16.2, "humidity": 72, "pressure": 1012},
                "weather": [{"description": "light rain", "icon": "10d"}],
                "wind": {"speed": 4.2},
                "visibility": 8500
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_map_current_converts_units() {
        let report = map_current(full_current(), "London").unwrap();
        assert_eq!(report.location, "London");
        assert_eq!(report.temperature, 17);
        assert_eq!(report.wind_speed, 15); // 4.2 m/s -> 15.12 km/h
        assert_eq!(report.visibility, 9); // 8500 m -> 8.5 km, rounded
        assert_eq!(report.feels_like, 16);
    }

    #[test]
    fn test_map_current_rejects_missing_main() {
        let payload: CurrentPayload =
            serde_json::from_str(r#"{"weather": [{"description": "clear"}]}"#).unwrap();
        assert_eq!(map_current(payload, "x").unwrap_err(), FetchError::InvalidShape);
    }

    #[test]
    fn test_map_current_rejects_empty_weather() {
        let payload: CurrentPayload =
            serde_json::from_str(r#"{"main": {"temp": 10.0}, "weather": []}"#).unwrap();
        assert_eq!(map_current(payload, "x").unwrap_err(), FetchError::InvalidShape);
    }

    #[test]
    fn test_map_forecast_every_eighth_capped_at_five() {
        let entries: Vec<String> = (0..48)
            .map(|i| {
                format!(
                    r#"{{"dt": {}, "main": {{"temp": {}.0, "temp_max": 20.0, "temp_min": 10.0}}, "weather": [{{"description": "clear", "icon": "01d"}}]}}"#,
                    1_700_000_000 + i * 10_800,
                    i
                )
            })
            .collect();
        let payload: ForecastPayload =
            serde_json::from_str(&format!(r#"{{"list": [{}]}}"#, entries.join(","))).unwrap();

        let forecast = map_forecast(payload).unwrap();
        assert_eq!(forecast.len(), 5);
        assert_eq!(forecast[0].label, "Today");
    }

    #[test]
    fn test_map_forecast_missing_list_is_invalid_shape() {
        let payload: ForecastPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(map_forecast(payload).unwrap_err(), FetchError::InvalidShape);
    }

    #[test]
    fn test_forecast_entry_placeholder() {
        let entry: ForecastEntry = serde_json::from_str(r#"{"dt": 1700000000}"#).unwrap();
        let period = map_forecast_entry(2, entry);
        assert_eq!(period.label, "Unknown");
        assert_eq!(period.high, 20);
        assert_eq!(period.low, 10);
    }
}
