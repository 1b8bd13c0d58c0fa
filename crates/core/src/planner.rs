use serde_json::json;

use crate::models::{
    ChatReply, Intent, MealPlan, MealPlanDay, MealSlot, SuggestedAction, WinterGuide,
};

const BREAKFAST: &str = "4 eggs + 4 bacon slices";
const LUNCH: &str = "8oz ground beef patties (2)";
const DINNER: &str = "12oz ribeye steak + butter";
const SNACK: &str = "Pork rinds or hard cheese";
const ONE_MEAL_A_DAY: &str = "Or stick One Meal A day";

/// Fixed advisory payload per intent. Total over the intent set; the
/// wording is a compatibility contract with existing clients and must not
/// be edited.
pub fn advisory_text(intent: Intent) -> &'static str {
    match intent {
        Intent::FoodChoices => {
            "On carnivore diet, eat: Red meat, organ meats, eggs, fish, poultry. Focus on fatty cuts for energy."
        }
        Intent::AvoidList => {
            "Avoid: Sugar, grains, seed oils, processed foods, high-oxalate vegetables, alcohol."
        }
        Intent::Benefits => {
            "Benefits: Weight loss, reduced inflammation, stable energy, mental clarity, improved digestion, autoimmune relief."
        }
        Intent::VitaminD => {
            "In winter, supplement with Vitamin D3 (5000-10000 IU) + K2 (100mcg). Get from fatty fish and egg yolks."
        }
        Intent::Default => {
            "The carnivore diet focuses on animal foods only. It eliminates plants to reduce inflammation and optimize health."
        }
    }
}

pub fn compose_chat_reply(intent: Intent) -> ChatReply {
    ChatReply {
        reply_text: advisory_text(intent).to_string(),
        intent,
        suggested_actions: vec![
            action("meal_plan", "Get meal suggestions", json!({ "days": 7 })),
            action("nutrients", "Learn about nutrients", json!({ "food": "ribeye_steak" })),
            action("avoid_list", "See foods to avoid", json!({})),
            action("winter_guide", "Read the winter vitamin guide", json!({})),
        ],
    }
}

/// Builds a `days`-day plan. Every day carries the same four meal slots; the
/// repetition is deliberate, not a missing rotation feature. `days == 0`
/// yields an empty plan body under the usual header.
pub fn build_meal_plan(days: u32) -> MealPlan {
    let day_plans = (1..=days)
        .map(|day| MealPlanDay {
            day,
            breakfast: BREAKFAST.to_string(),
            lunch: LUNCH.to_string(),
            dinner: DINNER.to_string(),
            snack: SNACK.to_string(),
            alternative: ONE_MEAL_A_DAY.to_string(),
        })
        .collect();

    MealPlan {
        requested_days: days,
        days: day_plans,
    }
}

impl MealPlan {
    /// Renders the plan in its legacy text layout, byte-for-byte.
    pub fn render(&self) -> String {
        let mut plan = format!("{}-Day Carnivore Meal Plan:\n\n", self.requested_days);

        for day in &self.days {
            plan.push_str(&format!("Day {}:\n", day.day));
            plan.push_str(&format!("Breakfast: {}\n", day.breakfast));
            plan.push_str(&format!("Lunch: {}\n", day.lunch));
            plan.push_str(&format!("Dinner: {}\n", day.dinner));
            plan.push_str(&format!("Snack: {}\n\n", day.snack));
            plan.push_str(&format!("{}\n", day.alternative));
        }

        plan
    }
}

/// Echoes the food list into a fixed macro template. The 75/20/5 split is a
/// placeholder constant, not a computed estimate; it does not vary with the
/// input.
pub fn estimate_macros(foods: &str) -> String {
    format!(
        "For {foods}: Estimated 75% fat, 20% protein, 5% carbs (from eggs/dairy if included)."
    )
}

pub fn suggest_meals(slot: MealSlot) -> Vec<&'static str> {
    const BREAKFAST_IDEAS: [&str; 4] = [
        "4-6 scrambled eggs cooked in butter or tallow",
        "4-6 slices of bacon or sausage",
        "Leftover steak from dinner",
        "Ribeye steak and eggs",
    ];
    const LUNCH_IDEAS: [&str; 4] = [
        "2-3 beef burger patties (no bun)",
        "Chicken thighs with skin cooked in duck fat",
        "8-12oz of ground beef with melted cheese",
        "Canned sardines or salmon",
    ];
    const DINNER_IDEAS: [&str; 4] = [
        "12-16oz ribeye or New York strip steak",
        "Lamb chops with rosemary butter",
        "Pork belly or pork shoulder",
        "Salmon fillet with lemon butter sauce",
    ];

    match slot {
        MealSlot::Breakfast => BREAKFAST_IDEAS.to_vec(),
        MealSlot::Lunch => LUNCH_IDEAS.to_vec(),
        MealSlot::Dinner => DINNER_IDEAS.to_vec(),
        MealSlot::Any => BREAKFAST_IDEAS
            .iter()
            .chain(&LUNCH_IDEAS)
            .chain(&DINNER_IDEAS)
            .copied()
            .collect(),
    }
}

pub fn winter_guide() -> WinterGuide {
    WinterGuide {
        title: "Winter Vitamin Protocol for Carnivores".to_string(),
        overview: advisory_text(Intent::VitaminD).to_string(),
        supplement_protocol: vec![
            "Vitamin D3: 5000-10000 IU daily".to_string(),
            "Vitamin K2 (MK-7): 100-200mcg daily".to_string(),
            "Magnesium: 400mg before bed".to_string(),
            "Cod Liver Oil: 1 tsp daily".to_string(),
        ],
        food_sources: vec![
            "Fatty fish (salmon, mackerel, sardines)".to_string(),
            "Grass-fed butter and ghee".to_string(),
            "Egg yolks from pasture-raised chickens".to_string(),
            "Beef liver (once per week)".to_string(),
        ],
    }
}

fn action(action_type: &str, label: &str, payload: serde_json::Value) -> SuggestedAction {
    SuggestedAction {
        action_type: action_type.to_string(),
        label: label.to_string(),
        payload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_day_plan_is_header_only() {
        let plan = build_meal_plan(0);
        assert!(plan.days.is_empty());
        assert_eq!(plan.render(), "0-Day Carnivore Meal Plan:\n\n");
    }

    #[test]
    fn three_day_plan_has_identical_sequential_blocks() {
        let plan = build_meal_plan(3);
        assert_eq!(plan.days.len(), 3);
        assert_eq!(
            plan.days.iter().map(|d| d.day).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        for day in &plan.days {
            assert_eq!(day.breakfast, plan.days[0].breakfast);
            assert_eq!(day.dinner, plan.days[0].dinner);
        }

        let rendered = plan.render();
        assert!(rendered.starts_with("3-Day Carnivore Meal Plan:\n\n"));
        assert_eq!(rendered.matches("Day ").count(), 4); // header + 3 labels
        assert_eq!(rendered.matches("Breakfast: 4 eggs + 4 bacon slices").count(), 3);
    }

    #[test]
    fn single_day_render_layout_is_stable() {
        assert_eq!(
            build_meal_plan(1).render(),
            "1-Day Carnivore Meal Plan:\n\n\
             Day 1:\n\
             Breakfast: 4 eggs + 4 bacon slices\n\
             Lunch: 8oz ground beef patties (2)\n\
             Dinner: 12oz ribeye steak + butter\n\
             Snack: Pork rinds or hard cheese\n\n\
             Or stick One Meal A day\n"
        );
    }

    #[test]
    fn macros_echo_foods_into_constant_split() {
        let estimate = estimate_macros("eggs, cheese");
        assert!(estimate.contains("eggs, cheese"));
        assert!(estimate.contains("75% fat, 20% protein, 5% carbs"));
    }

    #[test]
    fn any_slot_concatenates_all_suggestions() {
        assert_eq!(suggest_meals(MealSlot::Breakfast).len(), 4);
        assert_eq!(suggest_meals(MealSlot::Any).len(), 12);
    }

    #[test]
    fn every_intent_has_advisory_text() {
        for intent in [
            Intent::FoodChoices,
            Intent::AvoidList,
            Intent::Benefits,
            Intent::VitaminD,
            Intent::Default,
        ] {
            assert!(!advisory_text(intent).is_empty());
        }
    }
}
