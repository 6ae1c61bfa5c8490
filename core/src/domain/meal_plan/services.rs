use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    meal_plan::{
        entities::MealPlan,
        extract::parse_meal_plan,
        ports::{LLMClient, MealPlanService},
        prompt::{PromptInput, ResponseMode, build_meal_plan_prompt},
        schema::get_meal_plan_schema,
        value_objects::{
            GenerateFromImageInput, GenerateFromIngredientsInput, GenerateHybridInput,
        },
    },
};

fn ensure_ingredients(ingredients: &[String]) -> Result<(), CoreError> {
    if ingredients.is_empty() {
        return Err(CoreError::InvalidInput("食材のリストが必要です".to_string()));
    }
    Ok(())
}

/// Structured-output replies are the JSON document itself; there is nothing to
/// extract. A mismatch still counts as schema validation failure.
fn parse_structured(raw: &str) -> Result<MealPlan, CoreError> {
    serde_json::from_str(raw).map_err(|e| {
        tracing::error!("structured reply failed schema validation: {}", e);
        CoreError::SchemaValidation(e.to_string())
    })
}

impl<O, G> MealPlanService for Service<O, G>
where
    O: LLMClient,
    G: LLMClient,
{
    async fn generate_from_ingredients(
        &self,
        input: GenerateFromIngredientsInput,
    ) -> Result<MealPlan, CoreError> {
        ensure_ingredients(&input.ingredients)?;

        let prompt = build_meal_plan_prompt(&PromptInput {
            ingredients: &input.ingredients,
            has_image: false,
            mode: ResponseMode::JsonInText,
        });

        let generation_id = generate_uuid_v7();
        tracing::info!(
            %generation_id,
            ingredient_count = input.ingredients.len(),
            "generating meal plan from ingredient list"
        );

        let raw = self
            .openai_client
            .generate_with_text(self.llm.openai_chat_model.clone(), prompt, None)
            .await?;

        parse_meal_plan(&raw)
    }

    async fn generate_from_image(
        &self,
        input: GenerateFromImageInput,
    ) -> Result<MealPlan, CoreError> {
        let prompt = build_meal_plan_prompt(&PromptInput {
            ingredients: &[],
            has_image: true,
            mode: ResponseMode::JsonInText,
        });

        let generation_id = generate_uuid_v7();
        tracing::info!(
            %generation_id,
            image_bytes = input.image.data.len(),
            "generating meal plan from image"
        );

        let raw = self
            .openai_client
            .generate_with_image(
                self.llm.openai_vision_model.clone(),
                prompt,
                input.image,
                None,
            )
            .await?;

        parse_meal_plan(&raw)
    }

    async fn generate_hybrid(&self, input: GenerateHybridInput) -> Result<MealPlan, CoreError> {
        if input.ingredients.is_empty() && input.image.is_none() {
            return Err(CoreError::InvalidInput(
                "画像または食材リストのどちらかは必要です".to_string(),
            ));
        }

        let prompt = build_meal_plan_prompt(&PromptInput {
            ingredients: &input.ingredients,
            has_image: input.image.is_some(),
            mode: ResponseMode::JsonInText,
        });

        let generation_id = generate_uuid_v7();
        tracing::info!(
            %generation_id,
            ingredient_count = input.ingredients.len(),
            has_image = input.image.is_some(),
            "generating meal plan from hybrid input"
        );

        let raw = match input.image {
            Some(image) => {
                self.gemini_client
                    .generate_with_image(self.llm.gemini_model.clone(), prompt, image, None)
                    .await?
            }
            None => {
                self.gemini_client
                    .generate_with_text(self.llm.gemini_model.clone(), prompt, None)
                    .await?
            }
        };

        parse_meal_plan(&raw)
    }

    async fn generate_from_ingredients_structured(
        &self,
        input: GenerateFromIngredientsInput,
    ) -> Result<MealPlan, CoreError> {
        ensure_ingredients(&input.ingredients)?;

        let prompt = build_meal_plan_prompt(&PromptInput {
            ingredients: &input.ingredients,
            has_image: false,
            mode: ResponseMode::Structured,
        });

        let generation_id = generate_uuid_v7();
        tracing::info!(
            %generation_id,
            ingredient_count = input.ingredients.len(),
            "generating meal plan from ingredient list (structured output)"
        );

        let raw = self
            .openai_client
            .generate_with_text(
                self.llm.openai_vision_model.clone(),
                prompt,
                Some(get_meal_plan_schema()),
            )
            .await?;

        parse_structured(&raw)
    }

    async fn generate_from_image_structured(
        &self,
        input: GenerateFromImageInput,
    ) -> Result<MealPlan, CoreError> {
        let prompt = build_meal_plan_prompt(&PromptInput {
            ingredients: &[],
            has_image: true,
            mode: ResponseMode::Structured,
        });

        let generation_id = generate_uuid_v7();
        tracing::info!(
            %generation_id,
            image_bytes = input.image.data.len(),
            "generating meal plan from image (structured output)"
        );

        let raw = self
            .openai_client
            .generate_with_image(
                self.llm.openai_vision_model.clone(),
                prompt,
                input.image,
                Some(get_meal_plan_schema()),
            )
            .await?;

        parse_structured(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::LLMConfig;
    use crate::domain::meal_plan::ports::MockLLMClient;
    use crate::domain::meal_plan::prompt::MEAL_PLAN_EXAMPLE_JSON;
    use crate::domain::meal_plan::value_objects::ImagePayload;

    fn test_config() -> LLMConfig {
        LLMConfig {
            openai_api_key: "test-key".to_string(),
            openai_chat_model: "gpt-4o-mini".to_string(),
            openai_vision_model: "gpt-4o".to_string(),
            google_api_key: "test-key".to_string(),
            gemini_model: "gemini-1.5-flash".to_string(),
        }
    }

    fn service(
        openai: MockLLMClient,
        gemini: MockLLMClient,
    ) -> Service<MockLLMClient, MockLLMClient> {
        Service::new(openai, gemini, test_config())
    }

    fn test_image() -> ImagePayload {
        ImagePayload {
            data: vec![0xFF, 0xD8, 0xFF],
            mime_type: "image/jpeg".to_string(),
        }
    }

    #[tokio::test]
    async fn empty_ingredient_list_is_rejected_before_any_model_call() {
        let mut openai = MockLLMClient::new();
        openai.expect_generate_with_text().times(0);
        openai.expect_generate_with_image().times(0);

        let svc = service(openai, MockLLMClient::new());
        let err = svc
            .generate_from_ingredients(GenerateFromIngredientsInput {
                ingredients: vec![],
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn chat_reply_wrapped_in_prose_is_extracted_and_validated() {
        let mut openai = MockLLMClient::new();
        openai
            .expect_generate_with_text()
            .withf(|model, prompt, schema| {
                model == "gpt-4o-mini" && prompt.contains("鶏肉, 玉ねぎ, 人参") && schema.is_none()
            })
            .times(1)
            .returning(|_, _, _| {
                Box::pin(async move {
                    Ok(format!(
                        "以下の献立を提案します。\n{}\nぜひお試しください！",
                        MEAL_PLAN_EXAMPLE_JSON
                    ))
                })
            });

        let svc = service(openai, MockLLMClient::new());
        let plan = svc
            .generate_from_ingredients(GenerateFromIngredientsInput {
                ingredients: vec![
                    "鶏肉".to_string(),
                    "玉ねぎ".to_string(),
                    "人参".to_string(),
                ],
            })
            .await
            .unwrap();

        assert_eq!(plan.breakfast.name, "和風オムレツ");
        assert_eq!(plan.nutrition_summary.total_calories, "1550kcal");
    }

    #[tokio::test]
    async fn reply_missing_nutrition_summary_is_a_schema_failure() {
        let mut openai = MockLLMClient::new();
        openai.expect_generate_with_text().returning(|_, _, _| {
            Box::pin(async move {
                let mut value: serde_json::Value =
                    serde_json::from_str(MEAL_PLAN_EXAMPLE_JSON).unwrap();
                value.as_object_mut().unwrap().remove("nutritionSummary");
                Ok(value.to_string())
            })
        });

        let svc = service(openai, MockLLMClient::new());
        let err = svc
            .generate_from_ingredients(GenerateFromIngredientsInput {
                ingredients: vec!["卵".to_string()],
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::SchemaValidation(_)));
    }

    #[tokio::test]
    async fn reply_without_json_is_a_no_json_failure() {
        let mut openai = MockLLMClient::new();
        openai
            .expect_generate_with_text()
            .returning(|_, _, _| {
                Box::pin(async move { Ok("申し訳ありませんが、生成できませんでした。".to_string()) })
            });

        let svc = service(openai, MockLLMClient::new());
        let err = svc
            .generate_from_ingredients(GenerateFromIngredientsInput {
                ingredients: vec!["卵".to_string()],
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::NoJsonFound));
    }

    #[tokio::test]
    async fn provider_failure_surfaces_unchanged() {
        let mut openai = MockLLMClient::new();
        openai.expect_generate_with_text().returning(|_, _, _| {
            Box::pin(async move {
                Err(CoreError::ExternalServiceError("rate limited".to_string()))
            })
        });

        let svc = service(openai, MockLLMClient::new());
        let err = svc
            .generate_from_ingredients(GenerateFromIngredientsInput {
                ingredients: vec!["卵".to_string()],
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[tokio::test]
    async fn image_generation_uses_the_vision_model() {
        let mut openai = MockLLMClient::new();
        openai
            .expect_generate_with_image()
            .withf(|model, prompt, image, schema| {
                model == "gpt-4o"
                    && prompt.contains("この画像に写っている食材")
                    && image.mime_type == "image/jpeg"
                    && schema.is_none()
            })
            .times(1)
            .returning(|_, _, _, _| Box::pin(async move { Ok(MEAL_PLAN_EXAMPLE_JSON.to_string()) }));

        let svc = service(openai, MockLLMClient::new());
        let plan = svc
            .generate_from_image(GenerateFromImageInput {
                image: test_image(),
            })
            .await
            .unwrap();

        assert_eq!(plan.lunch.name, "チキン野菜炒め");
    }

    #[tokio::test]
    async fn hybrid_without_any_input_is_rejected_before_any_model_call() {
        let mut gemini = MockLLMClient::new();
        gemini.expect_generate_with_text().times(0);
        gemini.expect_generate_with_image().times(0);

        let svc = service(MockLLMClient::new(), gemini);
        let err = svc
            .generate_hybrid(GenerateHybridInput {
                ingredients: vec![],
                image: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn hybrid_with_image_goes_through_gemini() {
        let mut gemini = MockLLMClient::new();
        gemini
            .expect_generate_with_image()
            .withf(|model, prompt, _, schema| {
                model == "gemini-1.5-flash"
                    && prompt.contains("テキストで入力された食材: 豆腐")
                    && schema.is_none()
            })
            .times(1)
            .returning(|_, _, _, _| Box::pin(async move { Ok(MEAL_PLAN_EXAMPLE_JSON.to_string()) }));

        let svc = service(MockLLMClient::new(), gemini);
        let plan = svc
            .generate_hybrid(GenerateHybridInput {
                ingredients: vec!["豆腐".to_string()],
                image: Some(test_image()),
            })
            .await
            .unwrap();

        assert_eq!(plan.dinner.name, "豚の生姜焼き");
    }

    #[tokio::test]
    async fn hybrid_text_only_uses_the_text_call() {
        let mut gemini = MockLLMClient::new();
        gemini
            .expect_generate_with_text()
            .times(1)
            .returning(|_, _, _| Box::pin(async move { Ok(MEAL_PLAN_EXAMPLE_JSON.to_string()) }));
        gemini.expect_generate_with_image().times(0);

        let svc = service(MockLLMClient::new(), gemini);
        let plan = svc
            .generate_hybrid(GenerateHybridInput {
                ingredients: vec!["豆腐".to_string()],
                image: None,
            })
            .await
            .unwrap();

        assert_eq!(plan.breakfast.calories, "350kcal");
    }

    #[tokio::test]
    async fn structured_generation_passes_the_schema_and_skips_extraction() {
        let mut openai = MockLLMClient::new();
        openai
            .expect_generate_with_text()
            .withf(|model, prompt, schema| {
                model == "gpt-4o" && !prompt.contains("JSON形式の例") && schema.is_some()
            })
            .times(1)
            .returning(|_, _, _| Box::pin(async move { Ok(MEAL_PLAN_EXAMPLE_JSON.to_string()) }));

        let svc = service(openai, MockLLMClient::new());
        let plan = svc
            .generate_from_ingredients_structured(GenerateFromIngredientsInput {
                ingredients: vec!["卵".to_string()],
            })
            .await
            .unwrap();

        assert_eq!(plan.breakfast.name, "和風オムレツ");
    }

    #[tokio::test]
    async fn structured_reply_with_prose_is_not_tolerated() {
        let mut openai = MockLLMClient::new();
        openai.expect_generate_with_image().returning(|_, _, _, _| {
            Box::pin(async move { Ok(format!("説明: {}", MEAL_PLAN_EXAMPLE_JSON)) })
        });

        let svc = service(openai, MockLLMClient::new());
        let err = svc
            .generate_from_image_structured(GenerateFromImageInput {
                image: test_image(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::SchemaValidation(_)));
    }
}
