//! Extraction and validation of the meal plan object from free-text model
//! replies.

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::meal_plan::entities::MealPlan;

/// Returns the first complete top-level JSON object in `text`.
///
/// Brace depth is tracked with string and escape awareness, so braces inside
/// string values or in prose after the payload do not confuse the match.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    // Opening brace without a balancing close.
    None
}

/// Parses a raw chat reply into a validated [`MealPlan`].
///
/// No candidate object or invalid JSON maps to [`CoreError::NoJsonFound`];
/// JSON that does not match the meal plan shape maps to
/// [`CoreError::SchemaValidation`]. Unknown fields are dropped silently.
pub fn parse_meal_plan(raw: &str) -> Result<MealPlan, CoreError> {
    let candidate = extract_json_object(raw).ok_or(CoreError::NoJsonFound)?;

    let value: serde_json::Value =
        serde_json::from_str(candidate).map_err(|_| CoreError::NoJsonFound)?;

    serde_json::from_value(value).map_err(|e| CoreError::SchemaValidation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::meal_plan::prompt::MEAL_PLAN_EXAMPLE_JSON;

    #[test]
    fn extracts_object_surrounded_by_prose() {
        let text = format!(
            "以下の献立を提案します。\n{}\nぜひお試しください！",
            MEAL_PLAN_EXAMPLE_JSON
        );
        assert_eq!(extract_json_object(&text), Some(MEAL_PLAN_EXAMPLE_JSON));
    }

    #[test]
    fn no_braces_means_no_object() {
        assert_eq!(extract_json_object("献立を生成できませんでした"), None);
    }

    #[test]
    fn unbalanced_open_brace_is_rejected() {
        assert_eq!(extract_json_object(r#"{"breakfast": {"name": "x""#), None);
    }

    #[test]
    fn braces_inside_strings_do_not_end_the_object() {
        let text = r#"{"name": "a \"b}\" c", "n": 1} trailing } brace"#;
        assert_eq!(
            extract_json_object(text),
            Some(r#"{"name": "a \"b}\" c", "n": 1}"#)
        );
    }

    #[test]
    fn trailing_prose_with_braces_is_ignored() {
        let text = format!("{}\n参考: {{\"note\": 1}}", MEAL_PLAN_EXAMPLE_JSON);
        assert_eq!(extract_json_object(&text), Some(MEAL_PLAN_EXAMPLE_JSON));
    }

    #[test]
    fn example_reply_parses_into_meal_plan() {
        let plan = parse_meal_plan(MEAL_PLAN_EXAMPLE_JSON).unwrap();
        assert_eq!(plan.breakfast.name, "和風オムレツ");
        assert_eq!(plan.dinner.cooking_time, "25分");
        assert_eq!(plan.nutrition_summary.total_calories, "1550kcal");
    }

    #[test]
    fn missing_nutrition_summary_fails_schema_validation() {
        let mut value: serde_json::Value =
            serde_json::from_str(MEAL_PLAN_EXAMPLE_JSON).unwrap();
        value.as_object_mut().unwrap().remove("nutritionSummary");

        let err = parse_meal_plan(&value.to_string()).unwrap_err();
        assert!(matches!(err, CoreError::SchemaValidation(_)));
    }

    #[test]
    fn unknown_fields_are_dropped() {
        let mut value: serde_json::Value =
            serde_json::from_str(MEAL_PLAN_EXAMPLE_JSON).unwrap();
        value["breakfast"]["image"] = serde_json::json!("https://example.com/a.png");

        let plan = parse_meal_plan(&value.to_string()).unwrap();
        assert_eq!(plan.breakfast.name, "和風オムレツ");
    }

    #[test]
    fn reply_without_json_fails_with_no_json_found() {
        let err = parse_meal_plan("すみません、生成できません。").unwrap_err();
        assert!(matches!(err, CoreError::NoJsonFound));
    }

    #[test]
    fn valid_plan_survives_a_serialize_reparse_round_trip() {
        let plan = parse_meal_plan(MEAL_PLAN_EXAMPLE_JSON).unwrap();
        let serialized = serde_json::to_string(&plan).unwrap();
        let reparsed = parse_meal_plan(&serialized).unwrap();
        assert_eq!(plan, reparsed);
    }
}
