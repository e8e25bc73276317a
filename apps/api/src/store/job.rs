use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::models::Job;

pub const NO_JOB_FOR_ID: &str = "No job was found in the database with the given id.";
pub const JOB_ID_TAKEN: &str = "Job id already used.";

/// Row-level access to the `job` table.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn by_id(&self, id: i32) -> Result<Job, AppError>;
    async fn all(&self) -> Result<Vec<Job>, AppError>;
    async fn insert(&self, job: &Job) -> Result<(), AppError>;
    async fn delete(&self, id: i32) -> Result<(), AppError>;
    async fn update_base_salary(&self, id: i32, base_salary: f64) -> Result<Job, AppError>;
}

pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn by_id(&self, id: i32) -> Result<Job, AppError> {
        info!("Executing query: SELECT * FROM job WHERE id = {id}");
        let row: Option<Job> = sqlx::query_as("SELECT * FROM job WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.ok_or_else(|| AppError::NotFound(NO_JOB_FOR_ID.to_string()))
    }

    async fn all(&self) -> Result<Vec<Job>, AppError> {
        info!("Executing query: SELECT * FROM job");
        let rows: Vec<Job> = sqlx::query_as("SELECT * FROM job")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert(&self, job: &Job) -> Result<(), AppError> {
        info!("Inserting job entry, id = {}", job.id);
        sqlx::query(
            r#"INSERT INTO job (id, name, domain, "baseSalary")
               VALUES ($1, $2, $3, $4)"#,
        )
        .bind(job.id)
        .bind(&job.name)
        .bind(&job.domain)
        .bind(job.base_salary)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict(JOB_ID_TAKEN.to_string())
            }
            _ => AppError::from(e),
        })?;

        info!("Entry added successfully");
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.by_id(id).await?;

        sqlx::query("DELETE FROM job WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        info!("Entry deleted successfully, for id = {id}");
        Ok(())
    }

    async fn update_base_salary(&self, id: i32, base_salary: f64) -> Result<Job, AppError> {
        sqlx::query(r#"UPDATE job SET "baseSalary" = $1 WHERE id = $2"#)
            .bind(base_salary)
            .bind(id)
            .execute(&self.pool)
            .await?;

        info!("Updated base salary for id = {id}");
        self.by_id(id).await
    }
}
