use serde_json::json;

/// Returns the JSON schema for meal plan LLM responses.
///
/// Passed verbatim to providers that support structured output. Objects are
/// closed and every field required, so the provider cannot omit a meal or the
/// nutrition summary.
pub fn get_meal_plan_schema() -> serde_json::Value {
    let meal = json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "ingredients": {
                "type": "array",
                "items": { "type": "string" }
            },
            "cookingTime": { "type": "string" },
            "calories": { "type": "string" },
            "description": { "type": "string" }
        },
        "required": ["name", "ingredients", "cookingTime", "calories", "description"],
        "additionalProperties": false
    });

    json!({
        "type": "object",
        "properties": {
            "breakfast": meal.clone(),
            "lunch": meal.clone(),
            "dinner": meal,
            "nutritionSummary": {
                "type": "object",
                "properties": {
                    "totalCalories": { "type": "string" },
                    "protein": { "type": "string" },
                    "carbs": { "type": "string" },
                    "fat": { "type": "string" }
                },
                "required": ["totalCalories", "protein", "carbs", "fat"],
                "additionalProperties": false
            }
        },
        "required": ["breakfast", "lunch", "dinner", "nutritionSummary"],
        "additionalProperties": false
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_requires_all_meals_and_summary() {
        let schema = get_meal_plan_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        assert_eq!(
            required,
            vec!["breakfast", "lunch", "dinner", "nutritionSummary"]
        );
        assert_eq!(schema["additionalProperties"], json!(false));
    }
}
