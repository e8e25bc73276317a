pub mod health;
pub mod job;
pub mod person;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // person surface
        .route("/person", post(person::insert_person))
        .route("/person/all", get(person::get_all_persons))
        .route(
            "/person/:id",
            get(person::get_person_by_id).delete(person::delete_person),
        )
        .route(
            "/person/:id/:salary_index",
            put(person::update_salary_index),
        )
        .route("/person/:id/job", get(person::get_person_job))
        .route("/person/:id/salary", get(person::get_person_salary))
        .route(
            "/person/:id/workexperience",
            get(person::get_person_work_experience),
        )
        // job surface
        .route("/job", post(job::insert_job))
        .route("/job/all", get(job::get_all_jobs))
        .route("/job/:id", get(job::get_job_by_id).delete(job::delete_job))
        .route("/job/:id/:base_salary", put(job::update_base_salary))
        .with_state(state)
}

/// Ids arrive as raw path strings so a malformed value surfaces through the
/// same flattened failure body as every other error, not as a 400 rejection.
pub(crate) fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .map_err(|_| AppError::Validation(format!("invalid id: {raw}")))
}

/// Path scalars likewise. Literals carrying the float suffixes `f`/`d` are
/// rejected outright instead of being silently accepted by the parser.
pub(crate) fn parse_scalar(raw: &str, message: &str) -> Result<f64, AppError> {
    let lowered = raw.to_lowercase();
    if lowered.contains('f') || lowered.contains('d') {
        return Err(AppError::Validation(message.to_string()));
    }
    raw.parse::<f64>()
        .map_err(|_| AppError::Validation(message.to_string()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::build_router;
    use crate::models::{Job, Person};
    use crate::services::{JobService, PersonService};
    use crate::state::AppState;
    use crate::store::mock::{MemoryJobStore, MemoryPersonStore};

    fn seeded_state() -> AppState {
        let persons = vec![Person {
            id: 901,
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            job_id: 501,
            salary_index: 2.0,
        }];
        let jobs = vec![Job {
            id: 501,
            name: "Engineer".to_string(),
            domain: "Tech".to_string(),
            base_salary: 3000.0,
        }];
        let person_store = Arc::new(MemoryPersonStore::with_rows(persons));
        let job_store = Arc::new(MemoryJobStore::with_rows(jobs));
        AppState {
            persons: PersonService::new(person_store, job_store.clone()),
            jobs: JobService::new(job_store),
        }
    }

    async fn send(method: &str, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, String) {
        let app = build_router(seeded_state());
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn get_person_by_id_renders_entity_block() {
        let (status, body) = send("GET", "/person/901", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Person retrieved by id successfully"));
        assert!(body.contains("email = ana@x.com"));
    }

    #[tokio::test]
    async fn get_missing_person_flattens_to_500() {
        let (status, body) = send("GET", "/person/777", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.starts_with("Failed to get person by id:"));
        assert!(body.contains("No person found with given id."));
    }

    #[tokio::test]
    async fn non_numeric_id_flattens_to_500() {
        let (status, body) = send("GET", "/person/abc", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.starts_with("Failed to get person by id:"));
    }

    #[tokio::test]
    async fn insert_person_succeeds() {
        let payload = serde_json::json!({
            "id": 902, "name": "Bob", "email": "bob@x.com",
            "jobId": 501, "salaryIndex": 1.2
        });
        let (status, body) = send("POST", "/person", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Person inserted successfully.");
    }

    #[tokio::test]
    async fn insert_duplicate_person_reports_conflict_message() {
        let payload = serde_json::json!({
            "id": 901, "name": "Ana", "email": "ana@x.com",
            "jobId": 501, "salaryIndex": 2.0
        });
        let (status, body) = send("POST", "/person", Some(payload)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.starts_with("Failed to insert person:"));
        assert!(body.contains("already used"));
    }

    #[tokio::test]
    async fn insert_person_with_bad_email_fails_validation() {
        let payload = serde_json::json!({
            "id": 903, "name": "Cara", "email": "not-an-email",
            "jobId": 501, "salaryIndex": 1.2
        });
        let (status, body) = send("POST", "/person", Some(payload)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Email"));
    }

    #[tokio::test]
    async fn get_all_persons_lists_rows_in_pre_block() {
        let (status, body) = send("GET", "/person/all", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("Person database retrieved successfully:"));
        assert!(body.contains("<pre>"));
        assert!(body.contains("Person id: 901"));
    }

    #[tokio::test]
    async fn delete_person_then_refetch_fails() {
        let app = build_router(seeded_state());
        let delete = Request::builder()
            .method("DELETE")
            .uri("/person/901")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(delete).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let get = Request::builder()
            .uri("/person/901")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(get).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn noop_salary_index_update_conflicts() {
        let (status, body) = send("PUT", "/person/901/2.0", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.starts_with("Failed to update person's salary index:"));
        assert!(body.contains("already"));
    }

    #[tokio::test]
    async fn salary_index_with_float_suffix_is_rejected() {
        let (status, body) = send("PUT", "/person/901/2.5f", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("numeric values"));
    }

    #[tokio::test]
    async fn salary_index_update_succeeds() {
        let (status, body) = send("PUT", "/person/901/2.5", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Person's salary index updated successfully");
    }

    #[tokio::test]
    async fn person_salary_view_computes_derived_value() {
        let (status, body) = send("GET", "/person/901/salary", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Ana's salary retrieved successfully"));
        assert!(body.contains("6000"));
    }

    #[tokio::test]
    async fn person_work_experience_view_names_band() {
        let (status, body) = send("GET", "/person/901/workexperience", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("mid level"));
    }

    #[tokio::test]
    async fn person_job_view_renders_job_block() {
        let (status, body) = send("GET", "/person/901/job", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Ana's job retrieved successfully"));
        assert!(body.contains("domain = Tech"));
    }

    #[tokio::test]
    async fn get_job_by_id_renders_entity_block() {
        let (status, body) = send("GET", "/job/501", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Job retrieved by id successfully"));
        assert!(body.contains("base salary = 3000.0"));
    }

    #[tokio::test]
    async fn insert_job_with_low_salary_fails_validation() {
        let payload = serde_json::json!({
            "id": 502, "name": "Intern", "domain": "Tech", "baseSalary": 100.0
        });
        let (status, body) = send("POST", "/job", Some(payload)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.starts_with("Failed to insert job:"));
        assert!(body.contains("greater than 500"));
    }

    #[tokio::test]
    async fn base_salary_update_succeeds() {
        let (status, body) = send("PUT", "/job/501/4500", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Job base salary updated successfully.");
    }

    #[tokio::test]
    async fn get_all_jobs_lists_rows_in_pre_block() {
        let (status, body) = send("GET", "/job/all", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("Job database retrieved successfully:"));
        assert!(body.contains("Job id: 501"));
    }

    #[tokio::test]
    async fn delete_missing_job_flattens_to_500() {
        let (status, body) = send("DELETE", "/job/999", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.starts_with("Failed to delete job:"));
    }
}
