//! Recipe finder widget
//!
//! Trending, text, and ingredient-based recipe search against the
//! Spoonacular API, with filters, a per-result detail fan-out, and a
//! mock recipe set for demo mode or failed requests.

pub mod client;
pub mod mock;

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::Config;
use client::RecipeClient;

/// A recipe, either from the API or the demo set. Every field defaults
/// because API payloads are sparse outside the detail endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub ready_in_minutes: u32,
    pub servings: u32,
    pub summary: String,
    pub cuisines: Vec<String>,
    pub diets: Vec<String>,
    pub dish_types: Vec<String>,
    pub spoonacular_score: f64,
    pub health_score: f64,
    /// Price in cents per serving
    pub price_per_serving: f64,
}

/// Optional search filters for text search
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    pub diet: Option<String>,
    pub cuisine: Option<String>,
    pub dish_type: Option<String>,
    pub max_ready_time: Option<u32>,
    pub min_health_score: Option<u32>,
}

static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag regex"));

/// Strip markup from an API summary
pub fn plain_summary(summary: &str) -> String {
    HTML_TAG_RE.replace_all(summary, "").into_owned()
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut)
}

fn format_price(cents: f64) -> String {
    format!("${:.2}", cents / 100.0)
}

fn print_recipes(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes found. Try adjusting your search terms or filters.");
        return;
    }
    for recipe in recipes {
        println!("{} ({}/100)", recipe.title, recipe.spoonacular_score.round());
        let summary = plain_summary(&recipe.summary);
        if !summary.is_empty() {
            println!("  {}", truncate(&summary, 80));
        }
        println!(
            "  {} min | {} serving(s) | health {} | {} per serving",
            recipe.ready_in_minutes,
            recipe.servings,
            recipe.health_score.round(),
            format_price(recipe.price_per_serving)
        );
        if !recipe.cuisines.is_empty() || !recipe.diets.is_empty() {
            println!("  {}", recipe.cuisines.iter().chain(recipe.diets.iter()).cloned().collect::<Vec<_>>().join(", "));
        }
        println!();
    }
}

fn demo_notice() {
    println!("Demo mode: add a Spoonacular API key with 'folio config' for live data.");
}

/// Show trending (random) recipes
pub async fn show_trending(api_key: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let Some(client) = RecipeClient::from_config(&config.recipes, api_key) else {
        demo_notice();
        print_recipes(&mock::recipes());
        return Ok(());
    };

    match client.random(12).await {
        Ok(recipes) => print_recipes(&recipes),
        Err(error) => {
            warn!("trending recipes request failed: {}", error);
            println!("Failed to load trending recipes: {}", error.user_message());
            println!("Showing demo recipes instead:");
            print_recipes(&mock::recipes());
        }
    }
    Ok(())
}

/// Text search with optional filters
pub async fn search(query: &str, filters: SearchFilters, api_key: Option<String>) -> Result<()> {
    if query.trim().is_empty() {
        println!("Please enter a search term");
        return Ok(());
    }

    let config = Config::load()?;
    let Some(client) = RecipeClient::from_config(&config.recipes, api_key) else {
        demo_notice();
        print_recipes(&mock::search(query));
        return Ok(());
    };

    match client.search(query, &filters).await {
        Ok(recipes) => print_recipes(&recipes),
        Err(error) => {
            warn!("recipe search failed for '{}': {}", query, error);
            println!("Failed to search recipes: {}", error.user_message());
            println!("Showing demo recipes instead:");
            print_recipes(&mock::search(query));
        }
    }
    Ok(())
}

/// Ingredient-based search with a best-effort detail fan-out
pub async fn search_by_ingredients(ingredients: &[String], api_key: Option<String>) -> Result<()> {
    let ingredients: Vec<String> = ingredients
        .iter()
        .map(|i| i.trim().to_lowercase())
        .filter(|i| !i.is_empty())
        .collect();
    if ingredients.is_empty() {
        println!("Please add at least one ingredient");
        return Ok(());
    }

    let config = Config::load()?;
    let Some(client) = RecipeClient::from_config(&config.recipes, api_key) else {
        demo_notice();
        print_recipes(&mock::search_by_ingredients(&ingredients));
        return Ok(());
    };

    match client.by_ingredients(&ingredients).await {
        Ok(recipes) => print_recipes(&recipes),
        Err(error) => {
            warn!("ingredient search failed: {}", error);
            println!("Failed to search recipes: {}", error.user_message());
            println!("Showing demo recipes instead:");
            print_recipes(&mock::search_by_ingredients(&ingredients));
        }
    }
    Ok(())
}
