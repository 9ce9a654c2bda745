use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::student;
use util::state::AppState;
use validator::Validate;

use super::common::{StudentRequest, StudentResponse, ensure_class_exists};
use crate::extract::ApiJson;
use crate::response::ApiResponse;
use crate::routes::common::{db_error, error_response, format_validation_errors};

/// POST /api/students
///
/// ### Request Body
/// ```json
/// {
///   "name": "Ada",
///   "classId": "a7d2…",
///   "rollNumber": "R-17",
///   "dateOfBirth": "2015-03-09",
///   "guardians": [{ "name": "Grace", "phoneNumber": "555-0101" }]
/// }
/// ```
///
/// - `201 Created` with the student and its class
/// - `400 Bad Request` on validation failure or an unknown `classId`
pub async fn create_student(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<StudentRequest>,
) -> Response {
    let db = app_state.db();

    if let Err(e) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, format_validation_errors(&e));
    }
    if let Err(resp) = ensure_class_exists(db, req.class_id.as_deref()).await {
        return resp;
    }

    let created = match student::Model::create(db, req.into()).await {
        Ok(student) => student,
        Err(e) => return db_error(e),
    };

    match StudentResponse::load(db, created).await {
        Ok(data) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(data, "Student created successfully")),
        )
            .into_response(),
        Err(e) => db_error(e),
    }
}
