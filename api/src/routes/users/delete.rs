use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::user;
use util::state::AppState;

use crate::response::{ApiResponse, Empty};
use crate::routes::common::{db_error, not_found};

/// DELETE /api/users/{user_id}
///
/// Drives the user created and records they administered keep their rows with
/// the user reference cleared.
///
/// - `200 OK`
/// - `404 Not Found`
pub async fn delete_user(
    State(app_state): State<AppState>,
    Path(user_id): Path<String>,
) -> Response {
    match user::Model::delete(app_state.db(), &user_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty::default(), "User deleted successfully")),
        )
            .into_response(),
        Ok(false) => not_found("User"),
        Err(e) => db_error(e),
    }
}
