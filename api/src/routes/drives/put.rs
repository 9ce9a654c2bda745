use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use db::models::vaccination_drive;
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

use super::common::{DriveRequest, DriveResponse, check_references};
use crate::extract::ApiJson;
use crate::response::ApiResponse;
use crate::routes::common::{bad_request, db_error, error_response, format_validation_errors, not_found};

#[derive(Debug, Deserialize)]
pub struct UpdateDriveRequest {
    pub id: String,
    #[serde(flatten)]
    pub drive: DriveRequest,
}

/// PUT /api/drives
///
/// Replaces the drive. Body as for `POST` plus `id`. Leaving out `createdBy`
/// keeps the stored creator.
pub async fn update_drive(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<UpdateDriveRequest>,
) -> Response {
    let db = app_state.db();

    if req.id.trim().is_empty() {
        return bad_request("Drive id is required");
    }
    if let Err(e) = req.drive.validate() {
        return error_response(StatusCode::BAD_REQUEST, format_validation_errors(&e));
    }
    let new = match req.drive.into_new_drive(None) {
        Ok(new) => new,
        Err(msg) => return bad_request(msg),
    };
    if let Err(resp) = check_references(db, &new).await {
        return resp;
    }

    let drive = match vaccination_drive::Model::update(db, &req.id, new).await {
        Ok(Some(drive)) => drive,
        Ok(None) => return not_found("Drive"),
        Err(e) => return db_error(e),
    };

    match DriveResponse::load(db, drive, Utc::now()).await {
        Ok(resp) => (
            StatusCode::OK,
            Json(ApiResponse::success(resp, "Drive updated successfully")),
        )
            .into_response(),
        Err(e) => db_error(e),
    }
}
