use std::sync::Arc;

use crate::errors::AppError;
use crate::models::{Job, Person, WorkExperience};
use crate::services::job::calculate_salary;
use crate::services::{is_letters_and_spaces, INVALID_SALARY_INDEX};
use crate::store::{JobStore, PersonStore};

/// Validation in front of the person store, plus the derived views that walk
/// from a person to their job. A person's `job_id` is not checked at insert
/// time; a dangling reference fails only when the job is dereferenced.
#[derive(Clone)]
pub struct PersonService {
    store: Arc<dyn PersonStore>,
    jobs: Arc<dyn JobStore>,
}

impl PersonService {
    pub fn new(store: Arc<dyn PersonStore>, jobs: Arc<dyn JobStore>) -> Self {
        Self { store, jobs }
    }

    pub async fn person_by_id(&self, id: i32) -> Result<Person, AppError> {
        self.store.by_id(id).await
    }

    pub async fn all_persons(&self) -> Result<Vec<Person>, AppError> {
        self.store.all().await
    }

    pub async fn insert_person(&self, person: &Person) -> Result<(), AppError> {
        validate_insert_person(person)?;
        self.store.insert(person).await
    }

    pub async fn delete_person(&self, id: i32) -> Result<(), AppError> {
        self.store.delete(id).await
    }

    pub async fn update_salary_index(&self, id: i32, salary_index: f64) -> Result<Person, AppError> {
        let current = self.store.by_id(id).await?;
        if current.salary_index == salary_index {
            return Err(AppError::Conflict(format!(
                "Person's salary index is already {salary_index}"
            )));
        }
        if !(1.0..=3.0).contains(&salary_index) {
            return Err(AppError::Validation(INVALID_SALARY_INDEX.to_string()));
        }
        self.store.update_salary_index(id, salary_index).await
    }

    pub async fn person_job(&self, id: i32) -> Result<Job, AppError> {
        let person = self.store.by_id(id).await?;
        self.jobs.by_id(person.job_id).await
    }

    pub async fn person_salary(&self, id: i32) -> Result<f64, AppError> {
        let person = self.store.by_id(id).await?;
        let job = self.jobs.by_id(person.job_id).await?;
        calculate_salary(&person, &job)
    }

    pub async fn person_work_experience(&self, id: i32) -> Result<String, AppError> {
        let person = self.store.by_id(id).await?;
        let band = WorkExperience::classify(person.salary_index)?;
        Ok(format!("{}{}", person.name, band.description()))
    }
}

fn validate_insert_person(person: &Person) -> Result<(), AppError> {
    if !is_letters_and_spaces(&person.name) {
        return Err(AppError::Validation(
            "Invalid Input for Name - Please insert letters only!".to_string(),
        ));
    }
    if !person.email.contains('@') || !person.email.contains('.') {
        return Err(AppError::Validation(
            "Invalid Input for Email - Please insert a valid email with a standard format: example123@email.com"
                .to_string(),
        ));
    }
    if !(1.0..=3.0).contains(&person.salary_index) {
        return Err(AppError::Validation(INVALID_SALARY_INDEX.to_string()));
    }
    Ok(())
}
