//! Student handlers.

use crate::{state::AppState, Error, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
}

pub async fn list_students(State(state): State<AppState>) -> Result<Response> {
    let students = state.gradebook_service.list_students().await?;

    Ok((StatusCode::OK, Json(students)).into_response())
}

pub async fn create_student(
    State(state): State<AppState>,
    Json(req): Json<CreateStudentRequest>,
) -> Result<Response> {
    req.validate().map_err(|e| Error::Validation(e.to_string()))?;

    let student = state
        .gradebook_service
        .create_student(&req.first_name, &req.last_name, &req.email)
        .await?;

    Ok((StatusCode::CREATED, Json(student)).into_response())
}

/// Student information page model: identity, grade sequences, and the
/// per-subject averages (or "N/A").
pub async fn student_information(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response> {
    match state.gradebook_service.student_view_model(id).await? {
        Some(view) => Ok((StatusCode::OK, Json(view)).into_response()),
        None => Err(Error::StudentNotFound { id }),
    }
}

pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response> {
    // The service's delete is a silent no-op for missing students; surface
    // that case to HTTP clients as 404.
    if !state.gradebook_service.student_exists(id).await? {
        return Err(Error::StudentNotFound { id });
    }

    state.gradebook_service.delete_student(id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
