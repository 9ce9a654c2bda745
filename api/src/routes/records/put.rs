use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::vaccination_record;
use serde::Deserialize;
use util::state::AppState;

use super::common::{RecordRequest, RecordResponse, check_references, record_error};
use crate::extract::ApiJson;
use crate::response::ApiResponse;
use crate::routes::common::{bad_request, db_error, not_found};

#[derive(Debug, Deserialize)]
pub struct UpdateRecordRequest {
    pub id: String,
    #[serde(flatten)]
    pub record: RecordRequest,
}

/// PUT /api/records
///
/// Leaving out `administeredBy` keeps the stored value.
///
/// - `200 OK`
/// - `404 Not Found`
/// - `409 Conflict` when another record already holds the new (student, vaccine) pair
pub async fn update_record(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<UpdateRecordRequest>,
) -> Response {
    let db = app_state.db();

    if req.id.trim().is_empty() {
        return bad_request("Record id is required");
    }
    let new = req.record.into_new_record(None);
    if let Err(resp) = check_references(db, &new).await {
        return resp;
    }

    let record = match vaccination_record::Model::update(db, &req.id, new).await {
        Ok(Some(record)) => record,
        Ok(None) => return not_found("Record"),
        Err(e) => return record_error(e),
    };

    match RecordResponse::load(db, record).await {
        Ok(resp) => (
            StatusCode::OK,
            Json(ApiResponse::success(resp, "Record updated successfully")),
        )
            .into_response(),
        Err(e) => db_error(e),
    }
}
