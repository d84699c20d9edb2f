//! API client for the project and task services
//!
//! Both services are external; this module only knows their URLs and DTOs.

use crate::shared::api_utils::{api_url, path_segment};
use contracts::domain::project::aggregate::{ProjectRecord, ProjectSummary};
use contracts::domain::task::aggregate::Task;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// List all projects visible to the current user
pub async fn fetch_projects() -> Result<Vec<ProjectSummary>, ApiError> {
    get_json(&api_url("/projects")).await
}

/// Get a project record (template type and optional explicit feature list)
pub async fn fetch_project(project_id: &str) -> Result<ProjectRecord, ApiError> {
    get_json(&api_url(&format!("/projects/{}", path_segment(project_id)))).await
}

/// Get all tasks of a project
pub async fn fetch_tasks(project_id: &str) -> Result<Vec<Task>, ApiError> {
    get_json(&api_url(&format!("/projects/{}/tasks", path_segment(project_id)))).await
}
