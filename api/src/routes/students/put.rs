use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::student;
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

use super::common::{StudentRequest, StudentResponse, ensure_class_exists};
use crate::extract::ApiJson;
use crate::response::ApiResponse;
use crate::routes::common::{bad_request, db_error, error_response, format_validation_errors, not_found};

#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub id: String,
    #[serde(flatten)]
    pub student: StudentRequest,
}

/// PUT /api/students
///
/// Same body as `POST /students` plus `id`. Every field is replaced.
///
/// - `200 OK` with the updated student
/// - `400 Bad Request`
/// - `404 Not Found`
pub async fn update_student(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<UpdateStudentRequest>,
) -> Response {
    let db = app_state.db();

    if req.id.trim().is_empty() {
        return bad_request("Student id is required");
    }
    if let Err(e) = req.student.validate() {
        return error_response(StatusCode::BAD_REQUEST, format_validation_errors(&e));
    }
    if let Err(resp) = ensure_class_exists(db, req.student.class_id.as_deref()).await {
        return resp;
    }

    let updated = match student::Model::update(db, &req.id, req.student.into()).await {
        Ok(Some(student)) => student,
        Ok(None) => return not_found("Student"),
        Err(e) => return db_error(e),
    };

    match StudentResponse::load(db, updated).await {
        Ok(data) => (
            StatusCode::OK,
            Json(ApiResponse::success(data, "Student updated successfully")),
        )
            .into_response(),
        Err(e) => db_error(e),
    }
}
