//! Nutrition Endpoints
//!
//! Meal-plan generation and food photo analysis.

use serde::Serialize;

use super::client::{self, Auth};
use super::error::ApiError;
use crate::models::{FoodAnalysis, MealPlan};

/// Preferences collected by the nutrition page form.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRequest {
    pub diet: String,
    pub calorie_target: Option<u32>,
    pub meals_per_day: u32,
    pub exclusions: Vec<String>,
}

/// Ask the backend to generate a personalized meal plan.
pub async fn generate_meal_plan(request: &MealPlanRequest) -> Result<MealPlan, ApiError> {
    client::post("/nutrition/generate", Auth::Cookie, request).await
}

/// Save the current plan as the user's active plan (idempotent replace).
pub async fn save_meal_plan(plan: &MealPlan) -> Result<(), ApiError> {
    let _: serde_json::Value = client::put("/nutrition/plan", Auth::Cookie, plan).await?;
    Ok(())
}

/// Upload a food photo for macro analysis. Field name `image`, multipart.
pub async fn analyze_food_photo(file: &web_sys::File) -> Result<FoodAnalysis, ApiError> {
    client::upload("/nutrition/analyze", "image", file).await
}
