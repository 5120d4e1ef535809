//! Memory Endpoints
//!
//! Admin inspector for backend-stored user facts. These call sites use the
//! bearer token instead of the session cookie.

use serde::Deserialize;

use super::client::{self, Auth};
use super::error::ApiError;
use crate::models::Memory;

pub async fn list_memories() -> Result<Vec<Memory>, ApiError> {
    #[derive(Deserialize)]
    struct MemoriesResponse {
        #[serde(default)]
        memories: Vec<Memory>,
    }

    let result: MemoriesResponse = client::get("/admin/memories", Auth::Bearer).await?;
    Ok(result.memories)
}

pub async fn delete_memory(id: &str) -> Result<(), ApiError> {
    let _: serde_json::Value =
        client::delete(&format!("/admin/memories/{}", id), Auth::Bearer).await?;
    Ok(())
}
