use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One day of meals as produced by the model. Never persisted; the value is
/// handed straight back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    pub nutrition_summary: NutritionSummary,
}

/// Numeric-looking fields (`cooking_time`, `calories`) are free-form strings
/// supplied by the model, e.g. "15分" or "350kcal". Only presence and string
/// type are enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub name: String,
    pub ingredients: Vec<String>,
    pub cooking_time: String,
    pub calories: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionSummary {
    pub total_calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}
