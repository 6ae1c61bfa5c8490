use axum::extract::State;

use crate::application::http::{
    meal_plan::validators::GenerateMealPlanRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use kondate_core::domain::meal_plan::{
    entities::MealPlan, ports::MealPlanService, value_objects::GenerateFromIngredientsInput,
};

#[utoipa::path(
    post,
    path = "/generate-meal-plan",
    tag = "meal-plan",
    summary = "Generate a one-day meal plan from an ingredient list",
    description = "Builds a chat prompt from the supplied ingredients, extracts the JSON object from the model reply and validates it",
    request_body = GenerateMealPlanRequest,
    responses(
        (status = 200, body = MealPlan),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn generate_meal_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateMealPlanRequest>,
) -> Result<Response<MealPlan>, ApiError> {
    let plan = state
        .service
        .generate_from_ingredients(GenerateFromIngredientsInput {
            ingredients: payload.ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(plan))
}
