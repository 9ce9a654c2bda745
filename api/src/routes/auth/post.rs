use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::user::{self, NewUser};
use sea_orm::SqlErr;
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

use crate::auth::AuthUser;
use crate::extract::ApiJson;
use crate::response::ApiResponse;
use crate::routes::common::{db_error, error_response, format_validation_errors, trimmed};

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 64, message = "Username must be between 3 and 64 characters"))]
    #[serde(deserialize_with = "trimmed")]
    pub username: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    pub contact: Option<String>,

    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    #[serde(deserialize_with = "trimmed")]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token plus the profile it belongs to.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: user::Model,
}

impl From<user::Model> for AuthResponse {
    fn from(user: user::Model) -> Self {
        Self {
            token: user.token.clone(),
            user,
        }
    }
}

/// POST /api/auth/register
///
/// ### Request Body
/// ```json
/// { "username": "nurse.joy", "password": "longenough", "contact": "555-0100", "roles": ["nurse"] }
/// ```
///
/// ### Responses
/// - `201 Created` with `{ token, user }`
/// - `400 Bad Request` on validation failure
/// - `409 Conflict` when the username is taken
pub async fn register(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
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
        Ok(user) => {
            tracing::info!(user_id = %user.id, username = %user.username, "User registered");
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    AuthResponse::from(user),
                    "User registered successfully",
                )),
            )
                .into_response()
        }
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            error_response(StatusCode::CONFLICT, "A user with this username already exists")
        }
        Err(e) => db_error(e),
    }
}

/// POST /api/auth/login
///
/// Returns the account's current token; logging in does not rotate it.
///
/// ### Responses
/// - `200 OK` with `{ token, user }`
/// - `400 Bad Request` on validation failure
/// - `401 Unauthorized` with `"Invalid credentials"`
pub async fn login(State(app_state): State<AppState>, ApiJson(req): ApiJson<LoginRequest>) -> Response {
    if let Err(e) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, format_validation_errors(&e));
    }

    match user::Model::verify_credentials(app_state.db(), &req.username, &req.password).await {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                AuthResponse::from(user),
                "Login successful",
            )),
        )
            .into_response(),
        Ok(None) => {
            tracing::warn!(username = %req.username, "Failed login attempt");
            error_response(StatusCode::UNAUTHORIZED, "Invalid credentials")
        }
        Err(e) => db_error(e),
    }
}

/// POST /api/auth/rotate
///
/// Issues a fresh token for the caller. The token used for this request stops
/// working immediately.
///
/// - `200 OK` with `{ token, user }`
pub async fn rotate_token(
    State(app_state): State<AppState>,
    Extension(AuthUser(user)): Extension<AuthUser>,
) -> Response {
    match user.rotate_token(app_state.db()).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "Token rotated");
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    AuthResponse::from(user),
                    "Token rotated successfully",
                )),
            )
                .into_response()
        }
        Err(e) => db_error(e),
    }
}
