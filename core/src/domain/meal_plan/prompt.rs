//! The single prompt template shared by every generation operation.
//!
//! The business rules (use the supplied ingredients, 1800-2200 kcal/day,
//! home-style dishes, staple substitution allowed) live here and nowhere
//! else, so the five entry points cannot drift apart.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// The provider enforces the response schema; the reply is the JSON
    /// document itself.
    Structured,
    /// Plain chat completion. The prompt demands a JSON-only reply and shows
    /// the expected shape; the JSON object is extracted from the text
    /// afterwards.
    JsonInText,
}

#[derive(Debug, Clone)]
pub struct PromptInput<'a> {
    pub ingredients: &'a [String],
    pub has_image: bool,
    pub mode: ResponseMode,
}

/// The example object embedded in chat-mode prompts. Kept as one literal so
/// tests and the template agree byte for byte.
pub const MEAL_PLAN_EXAMPLE_JSON: &str = r#"{
  "breakfast": {
    "name": "和風オムレツ",
    "ingredients": ["卵", "玉ねぎ", "醤油"],
    "cookingTime": "15分",
    "calories": "350kcal",
    "description": "ふわふわの卵に玉ねぎの甘味がマッチした和風オムレツ"
  },
  "lunch": {
    "name": "チキン野菜炒め",
    "ingredients": ["鶏肉", "人参", "ピーマン"],
    "cookingTime": "20分",
    "calories": "550kcal",
    "description": "彩り豊かな野菜と鶏肉のヘルシー炒め"
  },
  "dinner": {
    "name": "豚の生姜焼き",
    "ingredients": ["豚肉", "玉ねぎ", "生姜"],
    "cookingTime": "25分",
    "calories": "650kcal",
    "description": "ご飯が進む定番の生姜焼き"
  },
  "nutritionSummary": {
    "totalCalories": "1550kcal",
    "protein": "65g",
    "carbs": "180g",
    "fat": "45g"
  }
}"#;

pub fn build_meal_plan_prompt(input: &PromptInput<'_>) -> String {
    let has_ingredients = !input.ingredients.is_empty();
    let mut prompt = String::new();

    match (has_ingredients, input.has_image) {
        (true, true) => {
            prompt.push_str("栄養バランスの良い1日の献立（朝食、昼食、夕食）を提案してください。\n");
            if input.mode == ResponseMode::JsonInText {
                prompt.push_str("必ずJSON形式のみで回答してください。\n");
            }
            prompt.push_str("\n利用可能な情報:\n");
            prompt.push_str(&format!(
                "- テキストで入力された食材: {}\n",
                input.ingredients.join(", ")
            ));
            prompt.push_str("- 画像: 添付の画像から食材を認識してください\n");
        }
        (false, true) => {
            prompt.push_str(
                "この画像に写っている食材を認識して、栄養バランスの良い1日の献立（朝食、昼食、夕食）を提案してください。\n",
            );
            if input.mode == ResponseMode::JsonInText {
                prompt.push_str("必ずJSON形式のみで回答してください。\n");
            }
        }
        _ => {
            prompt.push_str(
                "以下の食材を使って、栄養バランスの良い1日の献立（朝食、昼食、夕食）を提案してください。\n",
            );
            if input.mode == ResponseMode::JsonInText {
                prompt.push_str("必ずJSON形式のみで回答してください。\n");
            }
            prompt.push_str(&format!(
                "\n利用可能な食材: {}\n",
                input.ingredients.join(", ")
            ));
        }
    }

    prompt.push_str("\n要件:\n");
    prompt.push_str("- 提供された食材を可能な限り活用する\n");
    if input.has_image {
        prompt.push_str("- 画像から食材を正確に識別する\n");
    }
    prompt.push_str("- 栄養バランスを考慮する（タンパク質、炭水化物、脂質、ビタミン、ミネラル）\n");
    prompt.push_str("- 日本の家庭料理を中心とする\n");
    prompt.push_str("- 調理時間は現実的な範囲で設定する\n");
    prompt.push_str("- カロリーは成人の1日の摂取目安（1800-2200kcal）を考慮する\n");
    prompt.push_str("- 各料理には簡潔で魅力的な説明を付ける\n");
    prompt.push_str(
        "- 足りない食材がある場合は、一般的な調味料や基本的な食材（米、卵、調味料など）を追加して良い\n",
    );

    prompt.push_str("\n栄養バランスの目安:\n");
    prompt.push_str("- タンパク質: 体重1kgあたり1-1.2g\n");
    prompt.push_str("- 炭水化物: 総カロリーの50-60%\n");
    prompt.push_str("- 脂質: 総カロリーの20-30%\n");

    if input.mode == ResponseMode::JsonInText {
        prompt.push_str("\nJSON形式の例:\n");
        prompt.push_str(MEAL_PLAN_EXAMPLE_JSON);
        prompt.push('\n');
    }

    prompt
}
