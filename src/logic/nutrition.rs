use crate::state::{HealthFlag, Nutrition, NutritionSummary};

/// Starting score before bonuses.
const BASE_SCORE: u8 = 50;
/// Upper bound of the score.
const MAX_SCORE: u8 = 100;

/// Look up a nutrient by exact name, falling back to a zero amount in `unit`.
fn nutrient<'a>(nutrition: &'a Nutrition, name: &str, unit: &'a str) -> (f64, &'a str) {
    nutrition
        .nutrients
        .iter()
        .find(|n| n.name == name)
        .map_or((0.0, unit), |n| (n.amount, n.unit.as_str()))
}

/// What: Summarize a nutrition block into calories, a 0-100 score and flags.
///
/// Inputs:
/// - `nutrition`: Nutrient records from the details endpoint
///
/// Output:
/// - `NutritionSummary` with calories text, flags and the capped score
///
/// Details:
/// - Reads `Calories`, `Protein`, `Sodium` and `Vitamin A`; missing nutrients
///   count as zero.
/// - Score starts at 50: +15 protein > 25, +15 vitamin A > 20, +20 sodium
///   < 500, +10 calories < 500, capped at 100.
/// - Flags: high protein, good vitamin A source, and a sodium warning above
///   1000 mg.
#[must_use]
pub fn parse_nutritional_info(nutrition: &Nutrition) -> NutritionSummary {
    let (calories, calories_unit) = nutrient(nutrition, "Calories", "kcal");
    let (protein, _) = nutrient(nutrition, "Protein", "g");
    let (sodium, _) = nutrient(nutrition, "Sodium", "mg");
    let (vitamin_a, _) = nutrient(nutrition, "Vitamin A", "% of Daily Needs");

    let mut health_metrics = Vec::new();
    if protein > 25.0 {
        health_metrics.push(HealthFlag::HighProtein);
    }
    if vitamin_a > 20.0 {
        health_metrics.push(HealthFlag::GoodVitaminA);
    }
    if sodium > 1000.0 {
        health_metrics.push(HealthFlag::HighSodium);
    }

    let mut score = u16::from(BASE_SCORE);
    if protein > 25.0 {
        score += 15;
    }
    if vitamin_a > 20.0 {
        score += 15;
    }
    if sodium < 500.0 {
        score += 20;
    }
    if calories < 500.0 {
        score += 10;
    }
    let nutrition_score = u8::try_from(score.min(u16::from(MAX_SCORE))).unwrap_or(MAX_SCORE);

    NutritionSummary {
        calories: format!("{calories} {calories_unit}"),
        health_metrics,
        nutrition_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Nutrient;

    fn block(items: &[(&str, f64, &str)]) -> Nutrition {
        Nutrition {
            nutrients: items
                .iter()
                .map(|(name, amount, unit)| Nutrient {
                    name: (*name).to_string(),
                    amount: *amount,
                    unit: (*unit).to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn all_bonuses_are_capped_at_one_hundred() {
        let n = block(&[
            ("Calories", 400.0, "kcal"),
            ("Protein", 30.0, "g"),
            ("Sodium", 200.0, "mg"),
            ("Vitamin A", 25.0, "% of Daily Needs"),
        ]);
        let summary = parse_nutritional_info(&n);
        assert_eq!(summary.nutrition_score, 100);
        assert_eq!(summary.calories, "400 kcal");
        assert_eq!(
            summary.health_metrics,
            vec![HealthFlag::HighProtein, HealthFlag::GoodVitaminA]
        );
    }

    #[test]
    fn salty_heavy_dish_scores_base_only() {
        let n = block(&[
            ("Calories", 950.5, "kcal"),
            ("Protein", 10.0, "g"),
            ("Sodium", 1500.0, "mg"),
        ]);
        let summary = parse_nutritional_info(&n);
        assert_eq!(summary.nutrition_score, 50);
        assert_eq!(summary.calories, "950.5 kcal");
        assert_eq!(summary.health_metrics, vec![HealthFlag::HighSodium]);
    }

    #[test]
    fn empty_block_counts_missing_nutrients_as_zero() {
        let summary = parse_nutritional_info(&Nutrition::default());
        // low sodium and low calories bonuses apply to zero amounts
        assert_eq!(summary.nutrition_score, 80);
        assert_eq!(summary.calories, "0 kcal");
        assert!(summary.health_metrics.is_empty());
    }

    #[test]
    fn thresholds_are_strict() {
        let n = block(&[
            ("Calories", 500.0, "kcal"),
            ("Protein", 25.0, "g"),
            ("Sodium", 500.0, "mg"),
            ("Vitamin A", 20.0, "% of Daily Needs"),
        ]);
        let summary = parse_nutritional_info(&n);
        assert_eq!(summary.nutrition_score, 50);
        assert!(summary.health_metrics.is_empty());
    }
}
