//! Grade handlers.

use crate::{models::Subject, state::AppState, Error, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGradeRequest {
    pub grade: f64,
    pub student_id: i32,
    pub subject: String,
}

pub async fn create_grade(
    State(state): State<AppState>,
    Json(req): Json<CreateGradeRequest>,
) -> Result<Response> {
    let subject: Subject = req.subject.parse()?;

    let created = state
        .gradebook_service
        .create_grade(req.grade, req.student_id, subject)
        .await?;

    if !created {
        return Err(Error::Validation(format!(
            "{subject} grade {} for student {} was rejected",
            req.grade, req.student_id
        )));
    }

    Ok((StatusCode::CREATED, Json(json!({ "created": true }))).into_response())
}

/// Delete a grade and respond with the owning student's refreshed
/// information page model.
pub async fn delete_grade(
    State(state): State<AppState>,
    Path((subject, id)): Path<(String, i32)>,
) -> Result<Response> {
    let subject: Subject = subject.parse()?;

    match state.gradebook_service.delete_grade(id, subject).await? {
        Some(student_id) => {
            let view = state
                .gradebook_service
                .student_view_model(student_id)
                .await?
                .ok_or(Error::StudentNotFound { id: student_id })?;
            Ok((StatusCode::OK, Json(view)).into_response())
        }
        None => Err(Error::GradeNotFound { subject, id }),
    }
}
