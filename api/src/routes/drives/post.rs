use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use db::models::vaccination_drive;
use util::state::AppState;
use validator::Validate;

use super::common::{DriveRequest, DriveResponse, check_references};
use crate::auth::AuthUser;
use crate::extract::ApiJson;
use crate::response::ApiResponse;
use crate::routes::common::{bad_request, db_error, error_response, format_validation_errors};

/// POST /api/drives
///
/// ### Request Body
/// ```json
/// {
///   "name": "Autumn MMR",
///   "startDate": "2025-09-01",
///   "endDate": "2025-09-05",
///   "location": "Main hall",
///   "targetClasses": ["<class id>"],
///   "vaccineIds": ["<vaccine id>"],
///   "status": "planned",
///   "notes": "Bring consent forms"
/// }
/// ```
///
/// `createdBy` defaults to the caller. `status` is stored as given and has no
/// effect on `computedStatus`.
///
/// - `201 Created`
/// - `400 Bad Request` on validation failure, bad dates, or an unknown user/class/vaccine
pub async fn create_drive(
    State(app_state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    ApiJson(req): ApiJson<DriveRequest>,
) -> Response {
    let db = app_state.db();

    if let Err(e) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, format_validation_errors(&e));
    }
    let new = match req.into_new_drive(Some(caller.id.as_str())) {
        Ok(new) => new,
        Err(msg) => return bad_request(msg),
    };
    if let Err(resp) = check_references(db, &new).await {
        return resp;
    }

    let drive = match vaccination_drive::Model::create(db, new).await {
        Ok(drive) => drive,
        Err(e) => return db_error(e),
    };
    tracing::info!(drive_id = %drive.id, created_by = %caller.id, "Drive scheduled");

    match DriveResponse::load(db, drive, Utc::now()).await {
        Ok(resp) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(resp, "Drive created successfully")),
        )
            .into_response(),
        Err(e) => db_error(e),
    }
}
