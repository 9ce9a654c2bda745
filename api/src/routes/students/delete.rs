use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::student;
use util::state::AppState;

use crate::response::{ApiResponse, Empty};
use crate::routes::common::{db_error, not_found};

/// DELETE /api/students/{student_id}
///
/// The student's vaccination records are removed with it.
pub async fn delete_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<String>,
) -> Response {
    match student::Model::delete(app_state.db(), &student_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty::default(), "Student deleted successfully")),
        )
            .into_response(),
        Ok(false) => not_found("Student"),
        Err(e) => db_error(e),
    }
}
