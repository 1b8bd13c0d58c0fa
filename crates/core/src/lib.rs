pub mod intent;
pub mod models;
pub mod nutrition;
pub mod planner;

pub use intent::{classify_intent, normalize_text};
pub use models::*;
pub use nutrition::{food_benefits, normalize_food_key, nutrient_profile};
pub use planner::{
    advisory_text, build_meal_plan, compose_chat_reply, estimate_macros, suggest_meals,
    winter_guide,
};
