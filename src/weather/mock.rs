//! Hard-coded demo weather data
//!
//! Shown when no API key is configured or a request fails, so browsing
//! never leaves the widget empty.

use super::{ForecastPeriod, WeatherReport};

/// Demo current conditions for the requested city
pub fn current(city: &str) -> WeatherReport {
    WeatherReport {
        location: city.to_string(),
        country: "Demo Country".to_string(),
        temperature: 22,
        description: "Partly Cloudy".to_string(),
        humidity: 58,
        wind_speed: 14,
        pressure: 1015,
        visibility: 10,
        feels_like: 21,
        icon: "partly-cloudy".to_string(),
    }
}

/// Demo 5-period forecast
pub fn forecast() -> Vec<ForecastPeriod> {
    let periods = [
        ("Today", 24, 18, "Partly Cloudy", "partly-cloudy"),
        ("Tomorrow", 26, 20, "Sunny", "sunny"),
        ("Wednesday", 23, 17, "Rainy", "rainy"),
        ("Thursday", 21, 15, "Cloudy", "cloudy"),
        ("Friday", 25, 19, "Sunny", "sunny"),
    ];
    periods
        .into_iter()
        .map(|(label, high, low, description, icon)| ForecastPeriod {
            label: label.to_string(),
            high,
            low,
            description: description.to_string(),
            icon: icon.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_has_five_periods() {
        assert_eq!(forecast().len(), 5);
    }

    #[test]
    fn test_current_echoes_city() {
        assert_eq!(current("Lagos").location, "Lagos");
    }
}
