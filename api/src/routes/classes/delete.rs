use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::school_class;
use util::state::AppState;

use crate::response::{ApiResponse, Empty};
use crate::routes::common::{db_error, not_found};

/// DELETE /api/classes/{class_id}
pub async fn delete_class(
    State(app_state): State<AppState>,
    Path(class_id): Path<String>,
) -> Response {
    match school_class::Model::delete(app_state.db(), &class_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty::default(), "Class deleted successfully")),
        )
            .into_response(),
        Ok(false) => not_found("Class"),
        Err(e) => db_error(e),
    }
}
