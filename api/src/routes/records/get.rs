use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::{filters::RecordFilter, models::vaccination_record};
use serde::Deserialize;
use util::state::AppState;

use super::common::RecordResponse;
use crate::response::ApiResponse;
use crate::routes::common::{bad_request, db_error, not_found, parse_optional_date};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRecordsQuery {
    pub student_id: Option<String>,
    pub vaccine_id: Option<String>,
    pub drive_id: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

impl ListRecordsQuery {
    fn into_filter(self) -> Result<RecordFilter, String> {
        let mut filter = RecordFilter::new();
        if let Some(id) = self.student_id {
            filter = filter.with_student_id(id);
        }
        if let Some(id) = self.vaccine_id {
            filter = filter.with_vaccine_id(id);
        }
        if let Some(id) = self.drive_id {
            filter = filter.with_drive_id(id);
        }
        if let Some(from) = parse_optional_date(self.from_date.as_deref())? {
            filter = filter.with_from_date(from);
        }
        if let Some(to) = parse_optional_date(self.to_date.as_deref())? {
            filter = filter.with_to_date(to);
        }
        Ok(filter)
    }
}

/// GET /api/records
///
/// ### Query Parameters
/// - `studentId`, `vaccineId`, `driveId`: exact references
/// - `fromDate`, `toDate`: inclusive `YYYY-MM-DD` bounds on the administered date
///
/// ### Responses
/// - `200 OK` with records, each carrying `student` and `vaccine`
/// - `400 Bad Request` for a malformed date
pub async fn list_records(
    State(app_state): State<AppState>,
    Query(query): Query<ListRecordsQuery>,
) -> Response {
    let db = app_state.db();

    let filter = match query.into_filter() {
        Ok(filter) => filter,
        Err(msg) => return bad_request(msg),
    };

    let records = match vaccination_record::Model::list(db, &filter).await {
        Ok(records) => records,
        Err(e) => return db_error(e),
    };

    let mut data = Vec::with_capacity(records.len());
    for record in records {
        match RecordResponse::load(db, record).await {
            Ok(resp) => data.push(resp),
            Err(e) => return db_error(e),
        }
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(data, "Records retrieved successfully")),
    )
        .into_response()
}

/// GET /api/records/{record_id}
pub async fn get_record(
    State(app_state): State<AppState>,
    Path(record_id): Path<String>,
) -> Response {
    let db = app_state.db();

    let record = match vaccination_record::Model::find_by_id(db, &record_id).await {
        Ok(Some(record)) => record,
        Ok(None) => return not_found("Record"),
        Err(e) => return db_error(e),
    };

    match RecordResponse::load(db, record).await {
        Ok(resp) => (
            StatusCode::OK,
            Json(ApiResponse::success(resp, "Record retrieved successfully")),
        )
            .into_response(),
        Err(e) => db_error(e),
    }
}
