//! Weather lookup widget
//!
//! Current conditions and a 5-period forecast from the OpenWeatherMap
//! API, with classified failures, a capped user-triggered retry, and a
//! hard-coded demo dataset when no API key is configured or a request
//! fails.

pub mod client;
pub mod mock;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::Config;
use crate::fetch::{FetchError, FetchSession, MAX_RETRIES};
use client::WeatherClient;

/// Current conditions mapped into the internal shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub country: String,
    pub temperature: i32,
    pub description: String,
    pub humidity: u32,
    /// Wind speed in km/h, converted from the API's m/s
    pub wind_speed: i32,
    pub pressure: u32,
    /// Visibility in km, converted from the API's metres
    pub visibility: i32,
    pub feels_like: i32,
    pub icon: String,
}

/// One period of the 5-period forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    pub label: String,
    pub high: i32,
    pub low: i32,
    pub description: String,
    pub icon: String,
}

fn print_report(report: &WeatherReport) {
    println!("{}, {}", report.location, report.country);
    println!("  {}°C  {} (feels like {}°C)", report.temperature, report.description, report.feels_like);
    println!("  Humidity   {}%", report.humidity);
    println!("  Wind       {} km/h", report.wind_speed);
    println!("  Pressure   {} hPa", report.pressure);
    println!("  Visibility {} km", report.visibility);
}

fn print_forecast(forecast: &[ForecastPeriod]) {
    println!("5-period forecast:");
    for period in forecast {
        println!(
            "  {:<10} {:>3}° / {:>3}°  {}",
            period.label, period.high, period.low, period.description
        );
    }
}

fn print_failure(error: &FetchError) {
    println!("Error: {}", error.user_message());
}

async fn run_with_retries<T, F, Fut>(
    session: &mut FetchSession<T>,
    retries: u32,
    mut attempt: F,
) -> Option<T>
where
    T: Clone,
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, FetchError>>,
{
    let budget = retries.min(MAX_RETRIES);
    let mut ticket = session.begin();
    loop {
        match attempt().await {
            Ok(value) => {
                session.complete(ticket, value.clone());
                return Some(value);
            }
            Err(error) => {
                print_failure(&error);
                session.fail(ticket, error);
                if session.retries() >= budget {
                    return None;
                }
                match session.begin_retry() {
                    Some(next) => {
                        println!("Retrying ({}/{})...", session.retries(), MAX_RETRIES);
                        ticket = next;
                    }
                    None => {
                        println!("Maximum retry attempts reached. Please try again later.");
                        return None;
                    }
                }
            }
        }
    }
}

/// Look up and print current conditions for a city
pub async fn show_current(city: &str, api_key: Option<String>, retries: u32) -> Result<()> {
    let city = city.trim();
    if city.is_empty() {
        println!("Please enter a city name");
        return Ok(());
    }

    let config = Config::load()?;
    let Some(client) = WeatherClient::from_config(&config.weather, api_key) else {
        println!("Demo mode: add a weather API key with 'folio config' for live data.");
        print_report(&mock::current(city));
        return Ok(());
    };

    let mut session = FetchSession::new();
    match run_with_retries(&mut session, retries, || client.current(city)).await {
        Some(report) => print_report(&report),
        None => {
            warn!("weather request failed for '{}', showing demo data", city);
            println!("Showing demo data instead:");
            print_report(&mock::current(city));
        }
    }
    Ok(())
}

/// Look up and print the 5-period forecast for a city
pub async fn show_forecast(city: &str, api_key: Option<String>, retries: u32) -> Result<()> {
    let city = city.trim();
    if city.is_empty() {
        println!("Please enter a city name");
        return Ok(());
    }

    let config = Config::load()?;
    let Some(client) = WeatherClient::from_config(&config.weather, api_key) else {
        println!("Demo mode: add a weather API key with 'folio config' for live data.");
        print_forecast(&mock::forecast());
        return Ok(());
    };

    let mut session = FetchSession::new();
    match run_with_retries(&mut session, retries, || client.forecast(city)).await {
        Some(forecast) => print_forecast(&forecast),
        None => {
            warn!("forecast request failed for '{}', showing demo data", city);
            println!("Showing demo data instead:");
            print_forecast(&mock::forecast());
        }
    }
    Ok(())
}
