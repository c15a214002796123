//! Difficulty and nutrition rules through the public API.

use recipe_finder::logic::{calculate_difficulty, parse_nutritional_info, sort_by_difficulty};
use recipe_finder::state::{Difficulty, HealthFlag, Ingredient, Nutrient, Nutrition, Recipe};

fn recipe(minutes: Option<u32>, ingredients: usize) -> Recipe {
    Recipe {
        ready_in_minutes: minutes,
        extended_ingredients: (0..ingredients)
            .map(|i| Ingredient {
                amount: Some(1.0),
                unit: String::new(),
                name: format!("item {i}"),
            })
            .collect(),
        ..Recipe::default()
    }
}

fn nutrient(name: &str, amount: f64, unit: &str) -> Nutrient {
    Nutrient {
        name: name.into(),
        amount,
        unit: unit.into(),
    }
}

#[test]
fn difficulty_tiers_follow_time_and_ingredients() {
    assert_eq!(calculate_difficulty(&recipe(Some(70), 3)), Difficulty::Hard);
    assert_eq!(calculate_difficulty(&recipe(Some(40), 5)), Difficulty::Medium);
    assert_eq!(calculate_difficulty(&recipe(Some(10), 3)), Difficulty::Easy);
    assert_eq!(calculate_difficulty(&recipe(Some(10), 16)), Difficulty::Hard);
    assert_eq!(calculate_difficulty(&recipe(None, 11)), Difficulty::Medium);
}

#[test]
fn sorting_puts_easy_first_and_keeps_ties_stable() {
    let mut list = vec![
        Recipe {
            id: 1,
            ..recipe(Some(90), 1)
        },
        Recipe {
            id: 2,
            ..recipe(Some(5), 1)
        },
        Recipe {
            id: 3,
            ..recipe(Some(45), 1)
        },
        Recipe {
            id: 4,
            ..recipe(Some(6), 1)
        },
    ];
    sort_by_difficulty(&mut list);
    let ids: Vec<u64> = list.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 4, 3, 1]);
}

#[test]
fn healthy_recipe_score_is_capped() {
    let nutrition = Nutrition {
        nutrients: vec![
            nutrient("Calories", 400.0, "kcal"),
            nutrient("Protein", 30.0, "g"),
            nutrient("Sodium", 200.0, "mg"),
            nutrient("Vitamin A", 25.0, "%"),
        ],
    };
    let summary = parse_nutritional_info(&nutrition);
    assert_eq!(summary.nutrition_score, 100);
    assert_eq!(summary.calories, "400 kcal");
    assert_eq!(
        summary.health_metrics,
        vec![HealthFlag::HighProtein, HealthFlag::GoodVitaminA]
    );
}

#[test]
fn salty_recipe_gets_a_warning() {
    let nutrition = Nutrition {
        nutrients: vec![
            nutrient("Calories", 900.0, "kcal"),
            nutrient("Sodium", 1500.0, "mg"),
        ],
    };
    let summary = parse_nutritional_info(&nutrition);
    assert_eq!(summary.nutrition_score, 50);
    assert_eq!(summary.health_metrics, vec![HealthFlag::HighSodium]);
    assert!(summary.health_metrics[0].is_warning());
}
