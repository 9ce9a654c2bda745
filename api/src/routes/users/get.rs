use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::{filters::UserFilter, models::user};
use serde::Deserialize;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::{db_error, not_found};

#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    pub username: Option<String>,
    pub contact: Option<String>,
    pub role: Option<String>,
}

impl From<ListUsersQuery> for UserFilter {
    fn from(query: ListUsersQuery) -> Self {
        let mut filter = UserFilter::new();
        if let Some(username) = query.username {
            filter = filter.with_username(username);
        }
        if let Some(contact) = query.contact {
            filter = filter.with_contact(contact);
        }
        if let Some(role) = query.role {
            filter = filter.with_role(role);
        }
        filter
    }
}

/// GET /api/users
///
/// ### Query Parameters
/// - `username` (optional): case-insensitive partial match
/// - `contact` (optional): case-insensitive partial match
/// - `role` (optional): users holding exactly this role
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     { "id": "0b0e…", "username": "nurse.joy", "contact": "555-0100", "roles": ["nurse"], "createdAt": "2025-09-01T08:00:00Z" }
///   ],
///   "message": "Users retrieved successfully"
/// }
/// ```
/// - `500 Internal Server Error`
pub async fn list_users(
    State(app_state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Response {
    match user::Model::list(app_state.db(), &query.into()).await {
        Ok(users) => (
            StatusCode::OK,
            Json(ApiResponse::success(users, "Users retrieved successfully")),
        )
            .into_response(),
        Err(e) => db_error(e),
    }
}

/// GET /api/users/{user_id}
///
/// - `200 OK` with the user
/// - `404 Not Found`
pub async fn get_user(State(app_state): State<AppState>, Path(user_id): Path<String>) -> Response {
    match user::Model::find_by_id(app_state.db(), &user_id).await {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(ApiResponse::success(user, "User retrieved successfully")),
        )
            .into_response(),
        Ok(None) => not_found("User"),
        Err(e) => db_error(e),
    }
}
