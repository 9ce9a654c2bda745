use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use db::{
    analytics::{self, DriveStatus},
    filters::DriveFilter,
    models::vaccination_drive,
};
use serde::Deserialize;
use util::state::AppState;

use super::common::DriveResponse;
use crate::response::ApiResponse;
use crate::routes::common::{bad_request, db_error, not_found};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDrivesQuery {
    pub status: Option<String>,
    pub target_class: Option<String>,
    pub vaccine_name: Option<String>,
}

/// GET /api/drives
///
/// ### Query Parameters
/// - `status`: `upcoming` | `ongoing` | `completed`, evaluated against the current time
/// - `targetClass`: drives whose target classes include this class id
/// - `vaccineName`: drives that include a vaccine with exactly this name
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [{
///     "id": "…", "name": "Autumn MMR",
///     "startDate": "2025-09-01T00:00:00Z", "endDate": "2025-09-05T00:00:00Z",
///     "targetClasses": ["…"], "vaccineIds": ["…"], "status": "planned",
///     "computedStatus": "upcoming",
///     "vaccines": [{ "id": "…", "name": "MMR" }]
///   }],
///   "message": "Drives retrieved successfully"
/// }
/// ```
/// - `400 Bad Request` for an unknown `status`
pub async fn list_drives(
    State(app_state): State<AppState>,
    Query(query): Query<ListDrivesQuery>,
) -> Response {
    let db = app_state.db();
    let now = Utc::now();

    let mut filter = DriveFilter::new();
    if let Some(raw) = query.status.as_deref().filter(|s| !s.trim().is_empty()) {
        match raw.parse::<DriveStatus>() {
            Ok(status) => filter = filter.with_status(status),
            Err(msg) => return bad_request(msg),
        }
    }
    if let Some(class_id) = query.target_class {
        filter = filter.with_target_class(class_id);
    }
    if let Some(name) = query.vaccine_name {
        filter = filter.with_vaccine_name(name);
    }

    let drives = match vaccination_drive::Model::list(db, &filter, now).await {
        Ok(drives) => drives,
        Err(e) => return db_error(e),
    };

    let mut data = Vec::with_capacity(drives.len());
    for drive in drives {
        match DriveResponse::load(db, drive, now).await {
            Ok(resp) => data.push(resp),
            Err(e) => return db_error(e),
        }
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(data, "Drives retrieved successfully")),
    )
        .into_response()
}

/// GET /api/drives/{drive_id}
///
/// Same shape as a list entry plus `registeredStudents`, `vaccinatedStudents`,
/// `expectedTotalDoses`, `totalVaccinationRecords` and `percentVaccinated`,
/// recomputed from the current roster and records on every call.
pub async fn get_drive(
    State(app_state): State<AppState>,
    Path(drive_id): Path<String>,
) -> Response {
    let db = app_state.db();
    let now = Utc::now();

    let drive = match vaccination_drive::Model::find_by_id(db, &drive_id).await {
        Ok(Some(drive)) => drive,
        Ok(None) => return not_found("Drive"),
        Err(e) => return db_error(e),
    };

    let stats = match analytics::compute_drive_stats(db, &drive).await {
        Ok(stats) => stats,
        Err(e) => return db_error(e),
    };

    match DriveResponse::load(db, drive, now).await {
        Ok(resp) => (
            StatusCode::OK,
            Json(ApiResponse::success(resp.with_stats(stats), "Drive retrieved successfully")),
        )
            .into_response(),
        Err(e) => db_error(e),
    }
}
