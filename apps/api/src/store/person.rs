use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::models::Person;

pub const NO_PERSON_FOR_ID: &str = "No person found with given id.";
pub const PERSON_ID_TAKEN: &str = "Person id already used.";

/// Row-level access to the `person` table. Trait seam so services and
/// handlers can be exercised against an in-memory double.
#[async_trait]
pub trait PersonStore: Send + Sync {
    async fn by_id(&self, id: i32) -> Result<Person, AppError>;
    async fn all(&self) -> Result<Vec<Person>, AppError>;
    async fn insert(&self, person: &Person) -> Result<(), AppError>;
    async fn delete(&self, id: i32) -> Result<(), AppError>;
    async fn update_salary_index(&self, id: i32, salary_index: f64) -> Result<Person, AppError>;
}

pub struct PgPersonStore {
    pool: PgPool,
}

impl PgPersonStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonStore for PgPersonStore {
    async fn by_id(&self, id: i32) -> Result<Person, AppError> {
        info!("Executing query: SELECT * FROM person WHERE id = {id}");
        let row: Option<Person> = sqlx::query_as("SELECT * FROM person WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.ok_or_else(|| AppError::NotFound(NO_PERSON_FOR_ID.to_string()))
    }

    async fn all(&self) -> Result<Vec<Person>, AppError> {
        info!("Executing query: SELECT * FROM person");
        let rows: Vec<Person> = sqlx::query_as("SELECT * FROM person")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert(&self, person: &Person) -> Result<(), AppError> {
        info!("Inserting person entry, id = {}", person.id);
        sqlx::query(
            r#"INSERT INTO person (id, name, email, "jobId", "salaryIndex")
               VALUES ($1, $2, $3, $4, $5)"#,
        )
        .bind(person.id)
        .bind(&person.name)
        .bind(&person.email)
        .bind(person.job_id)
        .bind(person.salary_index)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            // Primary-key violation doubles as the duplicate-id check.
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict(PERSON_ID_TAKEN.to_string())
            }
            _ => AppError::from(e),
        })?;

        info!("Entry added successfully");
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.by_id(id).await?;

        sqlx::query("DELETE FROM person WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        info!("Entry deleted successfully, for id = {id}");
        Ok(())
    }

    async fn update_salary_index(&self, id: i32, salary_index: f64) -> Result<Person, AppError> {
        sqlx::query(r#"UPDATE person SET "salaryIndex" = $1 WHERE id = $2"#)
            .bind(salary_index)
            .bind(id)
            .execute(&self.pool)
            .await?;

        info!("Updated salary index for id = {id}");
        self.by_id(id).await
    }
}
