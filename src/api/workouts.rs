//! Workout Endpoints
//!
//! Plan generation from the wizard's answers, plus saved plan listing.

use serde::{Deserialize, Serialize};

use super::client::{self, Auth};
use super::error::ApiError;
use crate::models::WorkoutPlan;

/// Everything the seven wizard steps collect, sent in a single POST.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRequest {
    pub goal: String,
    pub experience: String,
    pub days_per_week: u32,
    pub session_minutes: u32,
    pub equipment: Vec<String>,
    pub focus_areas: Vec<String>,
    pub notes: String,
}

impl Default for WorkoutRequest {
    fn default() -> Self {
        Self {
            goal: "general_fitness".to_string(),
            experience: "beginner".to_string(),
            days_per_week: 3,
            session_minutes: 45,
            equipment: Vec::new(),
            focus_areas: Vec::new(),
            notes: String::new(),
        }
    }
}

/// Generate a workout plan from the wizard answers.
pub async fn generate_workout(request: &WorkoutRequest) -> Result<WorkoutPlan, ApiError> {
    client::post("/workouts/generate", Auth::Cookie, request).await
}

/// List previously generated plans.
pub async fn list_plans() -> Result<Vec<WorkoutPlan>, ApiError> {
    #[derive(Deserialize)]
    struct PlansResponse {
        #[serde(default)]
        plans: Vec<WorkoutPlan>,
    }

    let result: PlansResponse = client::get("/workouts", Auth::Cookie).await?;
    Ok(result.plans)
}
