//! Demo recipe set
//!
//! A small hard-coded collection for demo mode, with simple title,
//! cuisine, and summary matching in place of the real search endpoints.

use super::Recipe;

/// The demo recipe collection
pub fn recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            title: "Spaghetti Carbonara".to_string(),
            image: "https://images.unsplash.com/photo-1621996346565-e3dbc353d2e5?w=400".to_string(),
            ready_in_minutes: 20,
            servings: 4,
            summary: "Classic Italian pasta dish with eggs, cheese, and pancetta.".to_string(),
            cuisines: vec!["Italian".to_string()],
            diets: vec![],
            dish_types: vec!["main course".to_string()],
            spoonacular_score: 95.0,
            health_score: 75.0,
            price_per_serving: 250.0,
        },
        Recipe {
            id: 2,
            title: "Chicken Tikka Masala".to_string(),
            image: "https://images.unsplash.com/photo-1565557623262-b51c2513a641?w=400".to_string(),
            ready_in_minutes: 45,
            servings: 6,
            summary: "Creamy and flavorful Indian curry with tender chicken pieces.".to_string(),
            cuisines: vec!["Indian".to_string()],
            diets: vec!["gluten free".to_string()],
            dish_types: vec!["main course".to_string()],
            spoonacular_score: 92.0,
            health_score: 80.0,
            price_per_serving: 320.0,
        },
        Recipe {
            id: 3,
            title: "Caesar Salad".to_string(),
            image: "https://images.unsplash.com/photo-1546793665-c74683f339c1?w=400".to_string(),
            ready_in_minutes: 15,
            servings: 2,
            summary: "Fresh romaine lettuce with classic Caesar dressing and croutons.".to_string(),
            cuisines: vec!["American".to_string()],
            diets: vec!["vegetarian".to_string()],
            dish_types: vec!["salad".to_string(), "side dish".to_string()],
            spoonacular_score: 88.0,
            health_score: 85.0,
            price_per_serving: 180.0,
        },
    ]
}

/// Demo text search: title or cuisine contains the query
pub fn search(query: &str) -> Vec<Recipe> {
    let query = query.to_lowercase();
    recipes()
        .into_iter()
        .filter(|r| {
            r.title.to_lowercase().contains(&query)
                || r.cuisines.iter().any(|c| c.to_lowercase().contains(&query))
        })
        .collect()
}

/// Demo ingredient search: title or summary mentions any ingredient;
/// falls back to the first three demo recipes when nothing matches
pub fn search_by_ingredients(ingredients: &[String]) -> Vec<Recipe> {
    let all = recipes();
    let matching: Vec<Recipe> = all
        .iter()
        .filter(|r| {
            ingredients.iter().any(|ingredient| {
                r.title.to_lowercase().contains(ingredient)
                    || r.summary.to_lowercase().contains(ingredient)
            })
        })
        .cloned()
        .collect();
    if matching.is_empty() {
        all.into_iter().take(3).collect()
    } else {
        matching
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_matches_cuisine() {
        let found = search("italian");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Spaghetti Carbonara");
    }

    #[test]
    fn test_ingredient_search_matches_summary() {
        let found = search_by_ingredients(&["chicken".to_string()]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Chicken Tikka Masala");
    }

    #[test]
    fn test_ingredient_search_falls_back() {
        let found = search_by_ingredients(&["durian".to_string()]);
        assert_eq!(found.len(), 3);
    }
}
