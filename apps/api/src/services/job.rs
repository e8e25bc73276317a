use std::sync::Arc;

use tracing::info;

use crate::errors::AppError;
use crate::models::{Job, Person};
use crate::services::{is_letters_and_spaces, INVALID_BASE_SALARY};
use crate::store::JobStore;

/// Validation in front of the job store. Structural checks run before any
/// write; identity checks (no-op update) read the current row first.
#[derive(Clone)]
pub struct JobService {
    store: Arc<dyn JobStore>,
}

impl JobService {
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        Self { store }
    }

    pub async fn job_by_id(&self, id: i32) -> Result<Job, AppError> {
        self.store.by_id(id).await
    }

    pub async fn all_jobs(&self) -> Result<Vec<Job>, AppError> {
        self.store.all().await
    }

    pub async fn insert_job(&self, job: &Job) -> Result<(), AppError> {
        validate_insert_job(job)?;
        self.store.insert(job).await
    }

    pub async fn delete_job(&self, id: i32) -> Result<(), AppError> {
        self.store.delete(id).await
    }

    pub async fn update_base_salary(&self, id: i32, base_salary: f64) -> Result<Job, AppError> {
        let current = self.store.by_id(id).await?;
        if current.base_salary == base_salary {
            return Err(AppError::Conflict(format!(
                "Job base salary is already: {base_salary}"
            )));
        }
        if base_salary < 500.0 {
            return Err(AppError::Validation(INVALID_BASE_SALARY.to_string()));
        }
        self.store.update_base_salary(id, base_salary).await
    }
}

/// salary = salary index × base salary. Pure apart from the log line.
pub fn calculate_salary(person: &Person, job: &Job) -> Result<f64, AppError> {
    if !(1.0..=3.0).contains(&person.salary_index) {
        return Err(AppError::Validation(
            "Error: salary index outside of range 1 - 3.".to_string(),
        ));
    }
    if job.base_salary < 500.0 {
        return Err(AppError::Validation(
            "Error: base salary lesser than 500.".to_string(),
        ));
    }

    let salary = person.salary_index * job.base_salary;
    info!("{}'s salary is: {salary}", person.name);
    Ok(salary)
}

fn validate_insert_job(job: &Job) -> Result<(), AppError> {
    if !is_letters_and_spaces(&job.name) || !is_letters_and_spaces(&job.domain) {
        return Err(AppError::Validation(
            "Please enter letters for name or email!".to_string(),
        ));
    }
    if job.base_salary < 500.0 {
        return Err(AppError::Validation(INVALID_BASE_SALARY.to_string()));
    }
    Ok(())
}
