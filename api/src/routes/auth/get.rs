use axum::{Extension, Json, http::StatusCode, response::IntoResponse};
use db::models::user;

use crate::auth::AuthUser;
use crate::response::ApiResponse;

/// GET /api/auth/me
///
/// Returns the authenticated caller's profile. The token is not included.
///
/// - `200 OK` with the user
/// - `401 Unauthorized` / `403 Forbidden` from the auth gate
pub async fn me(Extension(AuthUser(user)): Extension<AuthUser>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::<user::Model>::success(user, "User retrieved successfully")),
    )
}
