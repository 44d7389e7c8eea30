use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::db::{Student, StudentPayload};
use crate::{StudentsError, router::StudentsState};

/// GET /api/students
pub async fn list_students(
    State(state): State<StudentsState>,
) -> Result<Json<Vec<Student>>, StudentsError> {
    Ok(Json(state.storage.list().await?))
}

/// POST /api/students -> 200 with the stored record, not 201.
pub async fn create_student(
    State(state): State<StudentsState>,
    Json(payload): Json<StudentPayload>,
) -> Result<Json<Student>, StudentsError> {
    Ok(Json(state.storage.create(payload).await?))
}

/// PUT /api/students/{id}
pub async fn update_student(
    State(state): State<StudentsState>,
    Path(id): Path<i64>,
    Json(payload): Json<StudentPayload>,
) -> Result<Json<Student>, StudentsError> {
    Ok(Json(state.storage.update(id, payload.name).await?))
}

/// DELETE /api/students/{id} -> 200 with an empty body.
pub async fn delete_student(
    State(state): State<StudentsState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StudentsError> {
    state.storage.delete(id).await?;
    Ok(StatusCode::OK)
}
