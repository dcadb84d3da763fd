//! Configuration management
//!
//! Manages API settings for the weather and recipe widgets and the
//! contact recipient, stored as TOML in the platform config directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Weather API settings
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Recipe API settings
    #[serde(default)]
    pub recipes: RecipeConfig,
    /// Contact form settings
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key; absent means demo mode
    pub api_key: Option<String>,
    /// Base URL for the current-conditions and forecast endpoints
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeConfig {
    /// Spoonacular API key; absent means demo mode
    pub api_key: Option<String>,
    #[serde(default = "default_recipe_base_url")]
    pub base_url: String,
}

fn default_recipe_base_url() -> String {
    "https://api.spoonacular.com/recipes".to_string()
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_recipe_base_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Recipient of contact form submissions
    #[serde(default = "default_contact_email")]
    pub email: String,
}

fn default_contact_email() -> String {
    crate::profile::owner().email.to_string()
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: default_contact_email(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating the default on first run
    pub fn load() -> Result<Self> {
        let config_path = config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            let config: Config = toml::from_str(&contents)
                .context("Failed to parse config file")?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = config_path()?;
        let parent = config_path
            .parent()
            .context("Config path has no parent directory")?;

        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(&config_path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }
}

/// Get the configuration file path
pub fn config_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "folio", "folio")
        .context("Failed to get project directories")?;
    Ok(dirs.config_dir().join("config.toml"))
}

/// Get the data directory path
pub fn data_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "folio", "folio")
        .context("Failed to get project directories")?;
    Ok(dirs.data_dir().to_path_buf())
}

fn key_status(key: &Option<String>) -> &'static str {
    if key.is_some() {
        "configured"
    } else {
        "not configured (demo mode)"
    }
}

/// Show the current configuration, with secrets elided
pub fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("Weather API key:  {}", key_status(&config.weather.api_key));
    println!("Weather base URL: {}", config.weather.base_url);
    println!("Recipe API key:   {}", key_status(&config.recipes.api_key));
    println!("Recipe base URL:  {}", config.recipes.base_url);
    println!("Contact email:    {}", config.contact.email);
    Ok(())
}

/// Store the weather API key
pub fn set_weather_api_key(key: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.weather.api_key = Some(key.trim().to_string());
    config.save()?;
    println!("Weather API key stored.");
    Ok(())
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Set the weather API base URL
pub fn set_weather_base_url(url: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.weather.base_url = normalize_base_url(url);
    config.save()?;
    println!("Weather base URL set to {}", config.weather.base_url);
    Ok(())
}

/// Store the recipe API key
pub fn set_recipe_api_key(key: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.recipes.api_key = Some(key.trim().to_string());
    config.save()?;
    println!("Recipe API key stored.");
    Ok(())
}

/// Set the contact recipient address
pub fn set_contact_email(email: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.contact.email = email.trim().to_string();
    config.save()?;
    println!("Contact email set to {}", config.contact.email);
    Ok(())
}

/// Reset configuration to defaults
pub fn reset_config() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_public_apis() {
        let config = Config::default();
        assert!(config.weather.base_url.contains("openweathermap"));
        assert!(config.recipes.base_url.contains("spoonacular"));
        assert!(config.weather.api_key.is_none());
        assert!(config.recipes.api_key.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.weather.api_key = Some("abc123".to_string());
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.weather.api_key.as_deref(), Some("abc123"));
        assert_eq!(parsed.contact.email, config.contact.email);
    }

    #[test]
    fn test_base_url_normalization() {
        assert_eq!(
            normalize_base_url(" https://proxy.example.com/data/2.5/ "),
            "https://proxy.example.com/data/2.5"
        );
        assert_eq!(
            normalize_base_url("https://api.openweathermap.org/data/2.5"),
            "https://api.openweathermap.org/data/2.5"
        );
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: Config = toml::from_str("[weather]\napi_key = \"k\"\n").unwrap();
        assert_eq!(parsed.weather.api_key.as_deref(), Some("k"));
        assert!(parsed.weather.base_url.contains("openweathermap"));
        assert!(!parsed.contact.email.is_empty());
    }
}
