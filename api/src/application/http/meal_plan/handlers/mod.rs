pub mod generate_meal_plan;
pub mod generate_meal_plan_from_image;
pub mod generate_meal_plan_hybrid;
