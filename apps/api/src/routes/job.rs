use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::Job;
use crate::routes::{parse_id, parse_scalar};
use crate::state::AppState;

/// GET /job/:id
pub async fn get_job_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, AppError> {
    let action = "Failed to get job by id";
    let id = parse_id(&id).map_err(|e| e.failed(action))?;
    let job = state.jobs.job_by_id(id).await.map_err(|e| e.failed(action))?;
    Ok(format!("Job retrieved by id successfully: \n{job}"))
}

/// POST /job
pub async fn insert_job(
    State(state): State<AppState>,
    Json(job): Json<Job>,
) -> Result<String, AppError> {
    state
        .jobs
        .insert_job(&job)
        .await
        .map_err(|e| e.failed("Failed to insert job"))?;
    Ok("Job inserted successfully.".to_string())
}

/// GET /job/all
pub async fn get_all_jobs(State(state): State<AppState>) -> Result<String, AppError> {
    let jobs = state
        .jobs
        .all_jobs()
        .await
        .map_err(|e| e.failed("Failed to retrieve job database"))?;

    let mut listing = String::new();
    for job in &jobs {
        listing.push_str(&job.row_line());
        listing.push('\n');
    }
    Ok(format!(
        "Job database retrieved successfully:\n<pre>{listing}</pre>"
    ))
}

/// DELETE /job/:id
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, AppError> {
    let action = "Failed to delete job";
    let id = parse_id(&id).map_err(|e| e.failed(action))?;
    state
        .jobs
        .delete_job(id)
        .await
        .map_err(|e| e.failed(action))?;
    Ok("Job deleted successfully.".to_string())
}

/// PUT /job/:id/:base_salary
pub async fn update_base_salary(
    State(state): State<AppState>,
    Path((id, base_salary)): Path<(String, String)>,
) -> Result<String, AppError> {
    let action = "Failed to update job base salary";
    let id = parse_id(&id).map_err(|e| e.failed(action))?;
    let base_salary = parse_scalar(
        &base_salary,
        "Invalid Input for Base Salary - Please insert numeric values (minimum 500).",
    )
    .map_err(|e| e.failed(action))?;

    state
        .jobs
        .update_base_salary(id, base_salary)
        .await
        .map_err(|e| e.failed(action))?;
    Ok("Job base salary updated successfully.".to_string())
}
