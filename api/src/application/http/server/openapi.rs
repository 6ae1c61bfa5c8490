use crate::application::http::meal_plan::router::MealPlanApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "kondate API"
    )
)]
pub struct ApiDoc;

/// Full document: base info plus the per-area path docs. Paths are prefixed
/// with the configured root path by the router.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(MealPlanApiDoc::openapi());
    openapi
}
