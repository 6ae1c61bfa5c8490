use axum::extract::{Multipart, State};

use super::generate_meal_plan_from_image::MAX_IMAGE_SIZE;
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};
use kondate_core::domain::meal_plan::{
    entities::MealPlan,
    ports::MealPlanService,
    value_objects::{GenerateHybridInput, ImagePayload},
};

#[utoipa::path(
    post,
    path = "/generate-meal-plan-hybrid",
    tag = "meal-plan",
    summary = "Generate a one-day meal plan from text, a photo, or both",
    description = "Multipart upload with an optional `image` file field and an optional `ingredients` field holding a JSON-encoded string array; at least one must be present",
    responses(
        (status = 200, body = MealPlan),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn generate_meal_plan_hybrid(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<MealPlan>, ApiError> {
    let mut ingredients: Vec<String> = Vec::new();
    let mut image: Option<ImagePayload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "ingredients" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read ingredients: {}", e))
                })?;

                ingredients = serde_json::from_str(&value).map_err(|_| {
                    ApiError::BadRequest("食材リストの形式が正しくありません".to_string())
                })?;
            }
            "image" => {
                let mime_type = field
                    .content_type()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "image/jpeg".to_string());

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image = Some(ImagePayload {
                    data: data.to_vec(),
                    mime_type,
                });
            }
            _ => {}
        }
    }

    if ingredients.is_empty() && image.is_none() {
        return Err(ApiError::BadRequest(
            "画像または食材リストのどちらかは必要です".to_string(),
        ));
    }

    let plan = state
        .service
        .generate_hybrid(GenerateHybridInput { ingredients, image })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(plan))
}
