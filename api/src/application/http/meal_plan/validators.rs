use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateMealPlanRequest {
    /// Ingredient names available to the user, e.g. ["鶏肉", "玉ねぎ"].
    #[validate(length(min = 1, message = "食材のリストが必要です"))]
    pub ingredients: Vec<String>,
}
