use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::user::{self, NewUser};
use sea_orm::SqlErr;
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

use crate::extract::ApiJson;
use crate::response::ApiResponse;
use crate::routes::common::{db_error, error_response, format_validation_errors, trimmed};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 64, message = "Username must be between 3 and 64 characters"))]
    #[serde(deserialize_with = "trimmed")]
    pub username: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    pub contact: Option<String>,

    #[serde(default)]
    pub roles: Vec<String>,
}

/// POST /api/users
///
/// Creates a staff account. The new account's token is not returned here; the
/// owner obtains it by logging in.
///
/// - `201 Created` with the user
/// - `400 Bad Request` on validation failure
/// - `409 Conflict` when the username is taken
pub async fn create_user(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<CreateUserRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, format_validation_errors(&e));
    }

    let new = NewUser {
        username: req.username,
        password: req.password,
        contact: req.contact,
        roles: req.roles,
    };

    match user::Model::create(app_state.db(), new).await {
        Ok(user) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(user, "User created successfully")),
        )
            .into_response(),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            error_response(StatusCode::CONFLICT, "A user with this username already exists")
        }
        Err(e) => db_error(e),
    }
}
