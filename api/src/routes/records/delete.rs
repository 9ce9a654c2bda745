use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::vaccination_record;
use util::state::AppState;

use crate::response::{ApiResponse, Empty};
use crate::routes::common::{db_error, not_found};

/// DELETE /api/records/{record_id}
pub async fn delete_record(
    State(app_state): State<AppState>,
    Path(record_id): Path<String>,
) -> Response {
    match vaccination_record::Model::delete(app_state.db(), &record_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty::default(), "Record deleted successfully")),
        )
            .into_response(),
        Ok(false) => not_found("Record"),
        Err(e) => db_error(e),
    }
}
