//! # Users Routes Module
//!
//! Staff account management under `/api/users`. Every route requires a valid token.
//!
//! - `get.rs` → list with filters, fetch by id
//! - `post.rs` → create
//! - `put.rs` → replace (id in body)
//! - `delete.rs` → delete by id

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use util::state::AppState;

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_user;
use get::{get_user, list_users};
use post::create_user;
use put::update_user;

/// - `GET /users` → `list_users`
/// - `POST /users` → `create_user`
/// - `PUT /users` → `update_user`
/// - `GET /users/{user_id}` → `get_user`
/// - `DELETE /users/{user_id}` → `delete_user`
pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/", post(create_user))
        .route("/", put(update_user))
        .route("/{user_id}", get(get_user))
        .route("/{user_id}", delete(delete_user))
}
