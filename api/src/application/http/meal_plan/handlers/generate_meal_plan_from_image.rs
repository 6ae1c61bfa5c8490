use axum::extract::{Multipart, State};

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
    value_objects::{GenerateFromImageInput, ImagePayload},
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[utoipa::path(
    post,
    path = "/generate-meal-plan-from-image",
    tag = "meal-plan",
    summary = "Generate a one-day meal plan from an ingredient photo",
    description = "Multipart upload with an `image` file field; the model recognizes the ingredients in the photo",
    responses(
        (status = 200, body = MealPlan),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn generate_meal_plan_from_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<MealPlan>, ApiError> {
    let mut image: Option<ImagePayload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == "image" {
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
    }

    let image =
        image.ok_or_else(|| ApiError::BadRequest("画像ファイルが見つかりません".to_string()))?;

    let plan = state
        .service
        .generate_from_image(GenerateFromImageInput { image })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(plan))
}
