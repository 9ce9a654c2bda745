use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::vaccine;
use util::state::AppState;

use crate::response::{ApiResponse, Empty};
use crate::routes::common::{db_error, not_found};

/// DELETE /api/vaccines/{vaccine_id}
///
/// Records for this vaccine are deleted with it. Drives that list it keep the id,
/// which is dropped from their hydrated vaccine list.
pub async fn delete_vaccine(
    State(app_state): State<AppState>,
    Path(vaccine_id): Path<String>,
) -> Response {
    match vaccine::Model::delete(app_state.db(), &vaccine_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty::default(), "Vaccine deleted successfully")),
        )
            .into_response(),
        Ok(false) => not_found("Vaccine"),
        Err(e) => db_error(e),
    }
}
