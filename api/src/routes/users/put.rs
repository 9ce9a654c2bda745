use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::user::{self, UserUpdate};
use sea_orm::SqlErr;
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

use crate::extract::ApiJson;
use crate::response::ApiResponse;
use crate::routes::common::{db_error, error_response, format_validation_errors, not_found, trimmed};

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "User id is required"))]
    pub id: String,

    #[validate(length(min = 3, max = 64, message = "Username must be between 3 and 64 characters"))]
    #[serde(deserialize_with = "trimmed")]
    pub username: String,

    /// Omit to keep the current password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,

    pub contact: Option<String>,

    #[serde(default)]
    pub roles: Vec<String>,
}

/// PUT /api/users
///
/// Replaces a user's profile. The id travels in the body.
///
/// - `200 OK` with the updated user
/// - `400 Bad Request` on validation failure
/// - `404 Not Found`
/// - `409 Conflict` when renaming onto a taken username
pub async fn update_user(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<UpdateUserRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, format_validation_errors(&e));
    }

    let update = UserUpdate {
        username: req.username,
        password: req.password,
        contact: req.contact,
        roles: req.roles,
    };

    match user::Model::update(app_state.db(), &req.id, update).await {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(ApiResponse::success(user, "User updated successfully")),
        )
            .into_response(),
        Ok(None) => not_found("User"),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            error_response(StatusCode::CONFLICT, "A user with this username already exists")
        }
        Err(e) => db_error(e),
    }
}
