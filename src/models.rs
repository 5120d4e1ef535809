//! Backend Data Shapes
//!
//! Typed views of the JSON records owned by the Vital API. The backend is the
//! source of truth for all of these; the client only deserializes and reads
//! them defensively, so anything the server may omit is `Option` or defaulted.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// A single named lab measurement from the backend's report analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Biomarker {
    pub name: String,
    #[serde(default)]
    pub value: Option<f64>,
    /// `"good"` or `"bad"` as judged by the analysis.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub normal_range: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// False when the uploaded report did not contain this marker.
    #[serde(default = "default_true")]
    pub is_available: bool,
}

/// Latest analyzed blood report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiomarkerReport {
    #[serde(default)]
    pub biomarkers: Vec<Biomarker>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub analyzed_at: Option<String>,
}

/// One point of the dashboard score trend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: String,
    pub score: u8,
}

/// Signed-in user profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub goals: Vec<String>,
}

/// A user-tracked health protocol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intervention {
    #[serde(default)]
    pub id: Option<String>,
    /// `supplement`, `diet`, `fitness` or `meditation`.
    #[serde(rename = "type", default)]
    pub intervention_type: String,
    #[serde(default)]
    pub recommendation: String,
    /// `active`, `completed` or `abandoned`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub target_metric: Option<String>,
    #[serde(default)]
    pub target_value: Option<String>,
}

/// AI-generated workout plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub focus: Option<String>,
    #[serde(default)]
    pub warmup: Vec<String>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    #[serde(default)]
    pub cooldown: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    #[serde(default)]
    pub sets: Option<u32>,
    #[serde(default)]
    pub reps: Option<String>,
    #[serde(default)]
    pub rest: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// AI-generated daily meal plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub meals: Vec<Meal>,
    #[serde(default)]
    pub daily_totals: Option<Macros>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub macros: Option<Macros>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Macros {
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
}

/// Result of analyzing a food photo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodAnalysis {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub macros: Option<Macros>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Backend-stored fact about a user, surfaced in the admin inspector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    pub id: String,
    #[serde(default)]
    pub memory: String,
    #[serde(default)]
    pub metadata: serde_json::Value,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn biomarker_defaults_fill_missing_fields() {
        // Backend frequently omits everything but the name.
        let b: Biomarker = serde_json::from_str(r#"{"name":"Hemoglobin"}"#).unwrap();
        assert_eq!(b.name, "Hemoglobin");
        assert!(b.is_available);
        assert!(b.value.is_none());
        assert_eq!(b.status, "");
    }

    #[test]
    fn biomarker_reads_camel_case_wire_names() {
        let b: Biomarker = serde_json::from_str(
            r#"{"name":"Ferritin","value":30.5,"status":"good","normalRange":"20-250 ng/mL","isAvailable":false}"#,
        )
        .unwrap();
        assert_eq!(b.normal_range.as_deref(), Some("20-250 ng/mL"));
        assert!(!b.is_available);
    }

    #[test]
    fn intervention_type_maps_from_type_key() {
        let i: Intervention = serde_json::from_str(
            r#"{"type":"supplement","recommendation":"Vitamin D 2000 IU","status":"active","startDate":"2026-08-01"}"#,
        )
        .unwrap();
        assert_eq!(i.intervention_type, "supplement");
        assert_eq!(i.start_date.as_deref(), Some("2026-08-01"));
        assert!(i.end_date.is_none());
    }

    #[test]
    fn workout_plan_tolerates_empty_sections() {
        let p: WorkoutPlan = serde_json::from_str(r#"{"title":"Push Day"}"#).unwrap();
        assert_eq!(p.title, "Push Day");
        assert!(p.warmup.is_empty());
        assert!(p.exercises.is_empty());
        assert!(p.cooldown.is_empty());
    }

    #[test]
    fn memory_metadata_is_opaque_json() {
        let m: Memory = serde_json::from_str(
            r#"{"id":"m1","memory":"prefers morning workouts","metadata":{"source":"chat"},"created_at":"2026-08-20T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(m.metadata["source"], "chat");
    }
}
