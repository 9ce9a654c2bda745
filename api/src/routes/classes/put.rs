use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::school_class;
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

use crate::extract::ApiJson;
use crate::response::ApiResponse;
use crate::routes::common::{db_error, error_response, format_validation_errors, not_found};

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateClassRequest {
    #[validate(length(min = 1, message = "Class id is required"))]
    pub id: String,
    #[validate(length(min = 1, message = "Class name is required"))]
    pub name: String,
    pub section: Option<String>,
}

/// PUT /api/classes
///
/// - `200 OK` with the updated class
/// - `404 Not Found`
pub async fn update_class(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<UpdateClassRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, format_validation_errors(&e));
    }

    match school_class::Model::update(app_state.db(), &req.id, req.name.trim(), req.section).await
    {
        Ok(Some(class)) => (
            StatusCode::OK,
            Json(ApiResponse::success(class, "Class updated successfully")),
        )
            .into_response(),
        Ok(None) => not_found("Class"),
        Err(e) => db_error(e),
    }
}
