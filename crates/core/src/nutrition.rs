use crate::models::{CoreError, NutrientHighlight, NutrientProfile};

/// Canonical lookup key: lowercased, spaces folded to underscores.
pub fn normalize_food_key(food: &str) -> String {
    food.trim().to_lowercase().replace(' ', "_")
}

/// Per-100g facts for the catalog foods. Unknown foods are a caller error
/// surfaced as [`CoreError::UnknownFood`], mapped to 404 at the HTTP layer.
pub fn nutrient_profile(food: &str) -> Result<NutrientProfile, CoreError> {
    let key = normalize_food_key(food);

    let profile = match key.as_str() {
        "ribeye_steak" | "ribeye" => NutrientProfile {
            food: "ribeye_steak".to_string(),
            protein_g: 29.0,
            fat_g: 24.0,
            carbs_g: 0.0,
            calories: 330,
            highlights: vec![
                highlight("vitamin_b12", 2.9, "mcg"),
                highlight("zinc", 6.2, "mg"),
                highlight("iron", 2.4, "mg"),
            ],
        },
        "eggs" | "egg" => NutrientProfile {
            food: "eggs".to_string(),
            protein_g: 13.0,
            fat_g: 11.0,
            carbs_g: 1.0,
            calories: 155,
            highlights: vec![
                highlight("vitamin_d", 87.0, "iu"),
                highlight("choline", 147.0, "mg"),
                highlight("selenium", 23.0, "mcg"),
            ],
        },
        "liver" | "beef_liver" => NutrientProfile {
            food: "liver".to_string(),
            protein_g: 26.0,
            fat_g: 4.0,
            carbs_g: 3.0,
            calories: 153,
            highlights: vec![
                highlight("vitamin_a", 16898.0, "iu"),
                highlight("vitamin_b12", 70.6, "mcg"),
                highlight("copper", 12.0, "mg"),
            ],
        },
        _ => return Err(CoreError::UnknownFood(key)),
    };

    Ok(profile)
}

pub fn food_benefits(food: &str) -> Vec<&'static str> {
    match normalize_food_key(food).as_str() {
        "ribeye_steak" | "ribeye" => vec![
            "Complete protein for muscle building",
            "Heme iron for energy production",
            "Zinc for immune function",
            "Creatine for brain and muscle health",
        ],
        "eggs" | "egg" => vec![
            "Perfect protein source",
            "Choline for brain health",
            "Vitamin D for immune function",
            "Lutein for eye health",
        ],
        "liver" | "beef_liver" => vec![
            "Nature's multivitamin",
            "High in Vitamin A for vision",
            "Massive B12 for energy",
            "Copper for joint health",
        ],
        _ => vec!["Rich in essential nutrients"],
    }
}

fn highlight(nutrient: &str, amount: f32, unit: &str) -> NutrientHighlight {
    NutrientHighlight {
        nutrient: nutrient.to_string(),
        amount,
        unit: unit.to_string(),
    }
}
