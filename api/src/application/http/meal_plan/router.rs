use super::handlers::{
    generate_meal_plan::{__path_generate_meal_plan, generate_meal_plan},
    generate_meal_plan_from_image::{
        __path_generate_meal_plan_from_image, generate_meal_plan_from_image,
    },
    generate_meal_plan_hybrid::{__path_generate_meal_plan_hybrid, generate_meal_plan_hybrid},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    generate_meal_plan,
    generate_meal_plan_from_image,
    generate_meal_plan_hybrid
))]
pub struct MealPlanApiDoc;

pub fn meal_plan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/generate-meal-plan", state.args.server.root_path),
            post(generate_meal_plan),
        )
        .route(
            &format!(
                "{}/generate-meal-plan-from-image",
                state.args.server.root_path
            ),
            post(generate_meal_plan_from_image),
        )
        .route(
            &format!("{}/generate-meal-plan-hybrid", state.args.server.root_path),
            post(generate_meal_plan_hybrid),
        )
}
