use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::vaccination_drive;
use util::state::AppState;

use crate::response::{ApiResponse, Empty};
use crate::routes::common::{db_error, not_found};

/// DELETE /api/drives/{drive_id}
pub async fn delete_drive(
    State(app_state): State<AppState>,
    Path(drive_id): Path<String>,
) -> Response {
    match vaccination_drive::Model::delete(app_state.db(), &drive_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty::default(), "Drive deleted successfully")),
        )
            .into_response(),
        Ok(false) => not_found("Drive"),
        Err(e) => db_error(e),
    }
}
