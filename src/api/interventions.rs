//! Intervention Endpoints
//!
//! User-tracked health protocols: list, create, move between statuses.

use serde::Serialize;

use super::client::{self, Auth};
use super::error::ApiError;
use crate::models::Intervention;

/// Fields for creating a new tracked protocol.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIntervention {
    #[serde(rename = "type")]
    pub intervention_type: String,
    pub recommendation: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub target_metric: Option<String>,
    pub target_value: Option<String>,
}

pub async fn list_interventions() -> Result<Vec<Intervention>, ApiError> {
    client::get("/interventions", Auth::Cookie).await
}

pub async fn create_intervention(new: &NewIntervention) -> Result<Intervention, ApiError> {
    client::post("/interventions", Auth::Cookie, new).await
}

/// Move a protocol to `active`, `completed` or `abandoned`.
pub async fn update_status(id: &str, status: &str) -> Result<Intervention, ApiError> {
    #[derive(Serialize)]
    struct StatusPatch<'a> {
        status: &'a str,
    }

    client::patch(&format!("/interventions/{}", id), Auth::Cookie, &StatusPatch { status }).await
}
