use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::Person;
use crate::routes::{parse_id, parse_scalar};
use crate::state::AppState;

/// GET /person/:id
pub async fn get_person_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, AppError> {
    let action = "Failed to get person by id";
    let id = parse_id(&id).map_err(|e| e.failed(action))?;
    let person = state
        .persons
        .person_by_id(id)
        .await
        .map_err(|e| e.failed(action))?;
    Ok(format!("Person retrieved by id successfully: {person}"))
}

/// POST /person
pub async fn insert_person(
    State(state): State<AppState>,
    Json(person): Json<Person>,
) -> Result<String, AppError> {
    state
        .persons
        .insert_person(&person)
        .await
        .map_err(|e| e.failed("Failed to insert person"))?;
    Ok("Person inserted successfully.".to_string())
}

/// GET /person/all
pub async fn get_all_persons(State(state): State<AppState>) -> Result<String, AppError> {
    let persons = state
        .persons
        .all_persons()
        .await
        .map_err(|e| e.failed("Failed to retrieve person database"))?;

    let mut listing = String::new();
    for person in &persons {
        listing.push_str(&person.row_line());
        listing.push('\n');
    }
    Ok(format!(
        "Person database retrieved successfully:\n<pre>{listing}</pre>"
    ))
}

/// DELETE /person/:id
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, AppError> {
    let action = "Failed to delete person";
    let id = parse_id(&id).map_err(|e| e.failed(action))?;
    state
        .persons
        .delete_person(id)
        .await
        .map_err(|e| e.failed(action))?;
    Ok("Person deleted successfully".to_string())
}

/// PUT /person/:id/:salary_index
pub async fn update_salary_index(
    State(state): State<AppState>,
    Path((id, salary_index)): Path<(String, String)>,
) -> Result<String, AppError> {
    let action = "Failed to update person's salary index";
    let id = parse_id(&id).map_err(|e| e.failed(action))?;
    let salary_index = parse_scalar(
        &salary_index,
        "Invalid Input for Salary Index - Please insert numeric values (1 to 3).",
    )
    .map_err(|e| e.failed(action))?;

    state
        .persons
        .update_salary_index(id, salary_index)
        .await
        .map_err(|e| e.failed(action))?;
    Ok("Person's salary index updated successfully".to_string())
}

/// GET /person/:id/job
pub async fn get_person_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, AppError> {
    let action = "Failed to retrieve person's job";
    let id = parse_id(&id).map_err(|e| e.failed(action))?;
    let person = state
        .persons
        .person_by_id(id)
        .await
        .map_err(|e| e.failed(action))?;
    let job = state
        .persons
        .person_job(id)
        .await
        .map_err(|e| e.failed(action))?;
    Ok(format!(
        "{}'s job retrieved successfully:\n{job}",
        person.name
    ))
}

/// GET /person/:id/salary
pub async fn get_person_salary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, AppError> {
    let action = "Failed to retrieve person's salary";
    let id = parse_id(&id).map_err(|e| e.failed(action))?;
    let person = state
        .persons
        .person_by_id(id)
        .await
        .map_err(|e| e.failed(action))?;
    let salary = state
        .persons
        .person_salary(id)
        .await
        .map_err(|e| e.failed(action))?;
    Ok(format!(
        "{}'s salary retrieved successfully: \n{salary}",
        person.name
    ))
}

/// GET /person/:id/workexperience
pub async fn get_person_work_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, AppError> {
    let action = "Failed to retrieve person's work experience";
    let id = parse_id(&id).map_err(|e| e.failed(action))?;
    let person = state
        .persons
        .person_by_id(id)
        .await
        .map_err(|e| e.failed(action))?;
    let experience = state
        .persons
        .person_work_experience(id)
        .await
        .map_err(|e| e.failed(action))?;
    Ok(format!(
        "{}'s work experience retrieved successfully: \n{experience}",
        person.name
    ))
}
