//! Biomarker Endpoints
//!
//! Blood report fetch/upload and the derived health score.

use serde::Deserialize;

use super::client::{self, Auth};
use super::error::ApiError;
use crate::models::{Biomarker, BiomarkerReport, TrendPoint};

/// Fetch the latest analyzed report.
pub async fn fetch_latest_report() -> Result<BiomarkerReport, ApiError> {
    client::get("/biomarkers/latest", Auth::Cookie).await
}

/// Fetch the score trend for the dashboard.
pub async fn fetch_trends() -> Result<Vec<TrendPoint>, ApiError> {
    #[derive(Deserialize)]
    struct TrendsResponse {
        #[serde(default)]
        trends: Vec<TrendPoint>,
    }

    let result: TrendsResponse = client::get("/biomarkers/trends", Auth::Cookie).await?;
    Ok(result.trends)
}

/// Backend acknowledgement of a report upload.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub report_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Upload a PDF blood report for analysis. Field name `report`, multipart.
pub async fn upload_report(file: &web_sys::File) -> Result<UploadResponse, ApiError> {
    client::upload("/biomarkers/upload", "report", file).await
}

/// Overall health score: the share of available biomarkers rated `good`,
/// as a rounded percentage. `None` when the report has no available markers
/// (pages render that as `"--"`).
pub fn health_score(biomarkers: &[Biomarker]) -> Option<u8> {
    let available: Vec<_> = biomarkers.iter().filter(|b| b.is_available).collect();
    if available.is_empty() {
        return None;
    }
    let good = available.iter().filter(|b| b.status == "good").count();
    Some((good as f64 / available.len() as f64 * 100.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(status: &str, is_available: bool) -> Biomarker {
        Biomarker {
            name: "x".to_string(),
            value: None,
            status: status.to_string(),
            unit: None,
            normal_range: None,
            category: None,
            is_available,
        }
    }

    #[test]
    fn score_counts_only_available_markers() {
        // 2 good of 3 available; the unavailable one is excluded entirely.
        let markers = vec![
            marker("good", true),
            marker("good", true),
            marker("bad", true),
            marker("good", false),
        ];
        assert_eq!(health_score(&markers), Some(67));
    }

    #[test]
    fn score_is_none_without_available_markers() {
        assert_eq!(health_score(&[]), None);
        assert_eq!(health_score(&[marker("good", false)]), None);
    }

    #[test]
    fn score_rounds_to_nearest_percent() {
        let markers = vec![
            marker("good", true),
            marker("bad", true),
            marker("bad", true),
        ];
        // 1/3 = 33.33 -> 33
        assert_eq!(health_score(&markers), Some(33));
    }

    #[test]
    fn score_is_pure_and_idempotent() {
        let markers = vec![marker("good", true), marker("bad", true)];
        assert_eq!(health_score(&markers), health_score(&markers));
        assert_eq!(health_score(&markers), Some(50));
    }

    #[test]
    fn all_good_is_one_hundred() {
        let markers = vec![marker("good", true); 4];
        assert_eq!(health_score(&markers), Some(100));
    }
}
