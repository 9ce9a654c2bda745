use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::{filters::VaccineFilter, models::vaccine};
use serde::Deserialize;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::{db_error, not_found};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVaccinesQuery {
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    #[serde(rename = "type")]
    pub vaccine_type: Option<String>,
    pub batch_id: Option<String>,
}

/// GET /api/vaccines
///
/// ### Query Parameters
/// - `name`, `manufacturer`: case-insensitive partial match
/// - `type`: exact vaccine type
/// - `batchId`: vaccines holding a batch with exactly this id
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [{
///     "id": "f00d…", "name": "MMR", "manufacturer": "Acme Bio",
///     "batches": [{ "batchId": "B-1", "expiryDate": "2026-06-01", "receivedDate": "2025-01-15" }],
///     "dosesPerVial": 10, "numberOfVials": 40
///   }],
///   "message": "Vaccines retrieved successfully"
/// }
/// ```
pub async fn list_vaccines(
    State(app_state): State<AppState>,
    Query(query): Query<ListVaccinesQuery>,
) -> Response {
    let mut filter = VaccineFilter::new();
    if let Some(name) = query.name {
        filter = filter.with_name(name);
    }
    if let Some(manufacturer) = query.manufacturer {
        filter = filter.with_manufacturer(manufacturer);
    }
    if let Some(vaccine_type) = query.vaccine_type {
        filter = filter.with_vaccine_type(vaccine_type);
    }
    if let Some(batch_id) = query.batch_id {
        filter = filter.with_batch_id(batch_id);
    }

    match vaccine::Model::list(app_state.db(), &filter).await {
        Ok(vaccines) => (
            StatusCode::OK,
            Json(ApiResponse::success(vaccines, "Vaccines retrieved successfully")),
        )
            .into_response(),
        Err(e) => db_error(e),
    }
}

/// GET /api/vaccines/{vaccine_id}
///
/// Batches come back in the order they were stored.
pub async fn get_vaccine(
    State(app_state): State<AppState>,
    Path(vaccine_id): Path<String>,
) -> Response {
    match vaccine::Model::find_by_id(app_state.db(), &vaccine_id).await {
        Ok(Some(vaccine)) => (
            StatusCode::OK,
            Json(ApiResponse::success(vaccine, "Vaccine retrieved successfully")),
        )
            .into_response(),
        Ok(None) => not_found("Vaccine"),
        Err(e) => db_error(e),
    }
}
