use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown food: {0}")]
    UnknownFood(String),
    #[error("invalid meal slot: {0}")]
    InvalidSlot(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    FoodChoices,
    AvoidList,
    Benefits,
    VitaminD,
    Default,
}

/// One meal slot of a plan day. `Any` is only meaningful for suggestion
/// queries and never appears inside a generated plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Any,
}

impl MealSlot {
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value.trim().to_lowercase().as_str() {
            "breakfast" | "morning" => Ok(Self::Breakfast),
            "lunch" | "midday" => Ok(Self::Lunch),
            "dinner" | "evening" => Ok(Self::Dinner),
            "any" | "all" | "" => Ok(Self::Any),
            other => Err(CoreError::InvalidSlot(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatInput {
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedAction {
    pub action_type: String,
    pub label: String,
    pub payload: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply_text: String,
    pub intent: Intent,
    pub suggested_actions: Vec<SuggestedAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanDay {
    pub day: u32,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snack: String,
    pub alternative: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    pub requested_days: u32,
    pub days: Vec<MealPlanDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientHighlight {
    pub nutrient: String,
    pub amount: f32,
    pub unit: String,
}

/// Per-100g nutrition facts for one catalog food.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientProfile {
    pub food: String,
    pub protein_g: f32,
    pub fat_g: f32,
    pub carbs_g: f32,
    pub calories: u32,
    pub highlights: Vec<NutrientHighlight>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinterGuide {
    pub title: String,
    pub overview: String,
    pub supplement_protocol: Vec<String>,
    pub food_sources: Vec<String>,
}
