use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::{filters::StudentFilter, models::student};
use serde::Deserialize;
use util::state::AppState;

use super::common::StudentResponse;
use crate::response::ApiResponse;
use crate::routes::common::{bad_request, db_error, not_found, parse_optional_date};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListStudentsQuery {
    pub name: Option<String>,
    /// Roll number, exact.
    pub student_id: Option<String>,
    pub class_id: Option<String>,
    pub date_of_birth: Option<String>,
    pub guardian_phone: Option<String>,
}

/// GET /api/students
///
/// ### Query Parameters
/// - `name`: case-insensitive partial match
/// - `studentId`: exact roll number
/// - `classId`: exact class id
/// - `dateOfBirth`: `YYYY-MM-DD`
/// - `guardianPhone`: any guardian with exactly this phone number
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [{
///     "id": "6c1f…", "name": "Ada", "classId": "a7d2…", "rollNumber": "R-17",
///     "dateOfBirth": "2015-03-09",
///     "guardians": [{ "name": "Grace", "phoneNumber": "555-0101" }],
///     "class": { "id": "a7d2…", "name": "Grade 5", "section": "B" }
///   }],
///   "message": "Students retrieved successfully"
/// }
/// ```
/// - `400 Bad Request` for a malformed `dateOfBirth`
pub async fn list_students(
    State(app_state): State<AppState>,
    Query(query): Query<ListStudentsQuery>,
) -> Response {
    let db = app_state.db();

    let mut filter = StudentFilter::new();
    if let Some(name) = query.name {
        filter = filter.with_name(name);
    }
    if let Some(roll_number) = query.student_id {
        filter = filter.with_roll_number(roll_number);
    }
    if let Some(class_id) = query.class_id {
        filter = filter.with_class_id(class_id);
    }
    match parse_optional_date(query.date_of_birth.as_deref()) {
        Ok(Some(dob)) => filter = filter.with_date_of_birth(dob),
        Ok(None) => {}
        Err(msg) => return bad_request(msg),
    }
    if let Some(phone) = query.guardian_phone {
        filter = filter.with_guardian_phone(phone);
    }

    let students = match student::Model::list(db, &filter).await {
        Ok(students) => students,
        Err(e) => return db_error(e),
    };

    match StudentResponse::load_many(db, students).await {
        Ok(data) => (
            StatusCode::OK,
            Json(ApiResponse::success(data, "Students retrieved successfully")),
        )
            .into_response(),
        Err(e) => db_error(e),
    }
}

/// GET /api/students/{student_id}
///
/// - `200 OK` with the student and its `class`
/// - `404 Not Found`
pub async fn get_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<String>,
) -> Response {
    let db = app_state.db();

    let student = match student::Model::find_by_id(db, &student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => return not_found("Student"),
        Err(e) => return db_error(e),
    };

    match StudentResponse::load(db, student).await {
        Ok(data) => (
            StatusCode::OK,
            Json(ApiResponse::success(data, "Student retrieved successfully")),
        )
            .into_response(),
        Err(e) => db_error(e),
    }
}
