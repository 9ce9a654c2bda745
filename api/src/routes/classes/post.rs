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
use crate::routes::common::{db_error, error_response, format_validation_errors};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateClassRequest {
    #[validate(length(min = 1, message = "Class name is required"))]
    pub name: String,
    pub section: Option<String>,
}

/// POST /api/classes
///
/// ```json
/// { "name": "Grade 5", "section": "B" }
/// ```
///
/// - `201 Created` with the class
/// - `400 Bad Request` when the name is empty
pub async fn create_class(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<CreateClassRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, format_validation_errors(&e));
    }

    match school_class::Model::create(app_state.db(), req.name.trim(), req.section).await {
        Ok(class) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(class, "Class created successfully")),
        )
            .into_response(),
        Err(e) => db_error(e),
    }
}
