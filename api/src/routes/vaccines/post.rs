use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::vaccine::{self, Batch};
use util::state::AppState;
use validator::Validate;

use super::common::VaccineRequest;
use crate::extract::ApiJson;
use crate::response::ApiResponse;
use crate::routes::common::{bad_request, db_error, error_response, format_validation_errors, not_found};

/// POST /api/vaccines
///
/// - `201 Created` with the vaccine
/// - `400 Bad Request` on validation failure
pub async fn create_vaccine(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<VaccineRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, format_validation_errors(&e));
    }

    match vaccine::Model::create(app_state.db(), req.into()).await {
        Ok(vaccine) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(vaccine, "Vaccine created successfully")),
        )
            .into_response(),
        Err(e) => db_error(e),
    }
}

/// POST /api/vaccines/{vaccine_id}/batches
///
/// ```json
/// { "batchId": "B-2", "expiryDate": "2027-01-01", "receivedDate": "2025-10-01" }
/// ```
///
/// - `200 OK` with the vaccine, the new batch last
/// - `404 Not Found`
pub async fn add_batch(
    State(app_state): State<AppState>,
    Path(vaccine_id): Path<String>,
    ApiJson(batch): ApiJson<Batch>,
) -> Response {
    if batch.batch_id.trim().is_empty() {
        return bad_request("batchId is required");
    }

    match vaccine::Model::add_batch(app_state.db(), &vaccine_id, batch).await {
        Ok(Some(vaccine)) => (
            StatusCode::OK,
            Json(ApiResponse::success(vaccine, "Batch added successfully")),
        )
            .into_response(),
        Ok(None) => not_found("Vaccine"),
        Err(e) => db_error(e),
    }
}
