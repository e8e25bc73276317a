//! In-memory store doubles for unit tests. Same failure messages as the
//! Postgres implementations so boundary assertions hold either way.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{Job, Person};
use crate::store::job::{JobStore, JOB_ID_TAKEN, NO_JOB_FOR_ID};
use crate::store::person::{PersonStore, NO_PERSON_FOR_ID, PERSON_ID_TAKEN};

#[derive(Default)]
pub struct MemoryPersonStore {
    rows: Mutex<Vec<Person>>,
}

impl MemoryPersonStore {
    pub fn with_rows(rows: Vec<Person>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }
}

#[async_trait]
impl PersonStore for MemoryPersonStore {
    async fn by_id(&self, id: i32) -> Result<Person, AppError> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(NO_PERSON_FOR_ID.to_string()))
    }

    async fn all(&self) -> Result<Vec<Person>, AppError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn insert(&self, person: &Person) -> Result<(), AppError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|p| p.id == person.id) {
            return Err(AppError::Conflict(PERSON_ID_TAKEN.to_string()));
        }
        rows.push(person.clone());
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound(NO_PERSON_FOR_ID.to_string()));
        }
        Ok(())
    }

    async fn update_salary_index(&self, id: i32, salary_index: f64) -> Result<Person, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(NO_PERSON_FOR_ID.to_string()))?;
        row.salary_index = salary_index;
        Ok(row.clone())
    }
}

#[derive(Default)]
pub struct MemoryJobStore {
    rows: Mutex<Vec<Job>>,
}

impl MemoryJobStore {
    pub fn with_rows(rows: Vec<Job>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn by_id(&self, id: i32) -> Result<Job, AppError> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|j| j.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(NO_JOB_FOR_ID.to_string()))
    }

    async fn all(&self) -> Result<Vec<Job>, AppError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn insert(&self, job: &Job) -> Result<(), AppError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|j| j.id == job.id) {
            return Err(AppError::Conflict(JOB_ID_TAKEN.to_string()));
        }
        rows.push(job.clone());
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|j| j.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound(NO_JOB_FOR_ID.to_string()));
        }
        Ok(())
    }

    async fn update_base_salary(&self, id: i32, base_salary: f64) -> Result<Job, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or_else(|| AppError::NotFound(NO_JOB_FOR_ID.to_string()))?;
        row.base_salary = base_salary;
        Ok(row.clone())
    }
}
