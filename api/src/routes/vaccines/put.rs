use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::vaccine;
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

use super::common::VaccineRequest;
use crate::extract::ApiJson;
use crate::response::ApiResponse;
use crate::routes::common::{bad_request, db_error, error_response, format_validation_errors, not_found};

#[derive(Debug, Deserialize)]
pub struct UpdateVaccineRequest {
    pub id: String,
    #[serde(flatten)]
    pub vaccine: VaccineRequest,
}

/// PUT /api/vaccines
///
/// Replaces every field, including the full batch list.
pub async fn update_vaccine(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<UpdateVaccineRequest>,
) -> Response {
    if req.id.trim().is_empty() {
        return bad_request("Vaccine id is required");
    }
    if let Err(e) = req.vaccine.validate() {
        return error_response(StatusCode::BAD_REQUEST, format_validation_errors(&e));
    }

    match vaccine::Model::update(app_state.db(), &req.id, req.vaccine.into()).await {
        Ok(Some(vaccine)) => (
            StatusCode::OK,
            Json(ApiResponse::success(vaccine, "Vaccine updated successfully")),
        )
            .into_response(),
        Ok(None) => not_found("Vaccine"),
        Err(e) => db_error(e),
    }
}
