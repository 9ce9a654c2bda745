use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::vaccination_record;
use util::state::AppState;

use super::common::{RecordRequest, RecordResponse, check_references, record_error};
use crate::auth::AuthUser;
use crate::extract::ApiJson;
use crate::response::ApiResponse;
use crate::routes::common::db_error;

/// POST /api/records
///
/// ### Request Body
/// ```json
/// {
///   "studentId": "…",
///   "vaccineId": "…",
///   "driveId": "…",
///   "date": "2025-09-02",
///   "batchId": "B-1",
///   "notes": "Left arm"
/// }
/// ```
///
/// `administeredBy` defaults to the caller.
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` when the student, vaccine, drive, or administering user does not exist
/// - `409 Conflict` when the student already has a record for this vaccine
pub async fn create_record(
    State(app_state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    ApiJson(req): ApiJson<RecordRequest>,
) -> Response {
    let db = app_state.db();
    let new = req.into_new_record(Some(caller.id.as_str()));

    if let Err(resp) = check_references(db, &new).await {
        return resp;
    }

    let record = match vaccination_record::Model::create(db, new).await {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(error = %e, "Vaccination record rejected");
            return record_error(e);
        }
    };

    match RecordResponse::load(db, record).await {
        Ok(resp) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(resp, "Record created successfully")),
        )
            .into_response(),
        Err(e) => db_error(e),
    }
}
