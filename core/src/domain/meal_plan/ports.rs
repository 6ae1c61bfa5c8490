use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::{
        entities::MealPlan,
        value_objects::{
            GenerateFromImageInput, GenerateFromIngredientsInput, GenerateHybridInput,
            ImagePayload,
        },
    },
};

/// LLM Client trait for calling AI models.
///
/// `response_schema` selects the provider's structured-output mode; when it is
/// `None` the reply is free text and the caller extracts the JSON itself.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        model: String,
        prompt: String,
        response_schema: Option<serde_json::Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_image(
        &self,
        model: String,
        prompt: String,
        image: ImagePayload,
        response_schema: Option<serde_json::Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for meal plan generation.
///
/// The `*_structured` operations are library entry points for an embedding UI
/// layer; the others back the HTTP endpoints. Every operation is single-shot:
/// no retry, no partial result.
#[cfg_attr(test, mockall::automock)]
pub trait MealPlanService: Send + Sync {
    fn generate_from_ingredients(
        &self,
        input: GenerateFromIngredientsInput,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;

    fn generate_from_image(
        &self,
        input: GenerateFromImageInput,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;

    fn generate_hybrid(
        &self,
        input: GenerateHybridInput,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;

    fn generate_from_ingredients_structured(
        &self,
        input: GenerateFromIngredientsInput,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;

    fn generate_from_image_structured(
        &self,
        input: GenerateFromImageInput,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;
}
