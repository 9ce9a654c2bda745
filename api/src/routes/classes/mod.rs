//! # Classes Routes Module
//!
//! - `GET /classes` → list, optionally filtered by `name` (partial) and `section`
//! - `GET /classes/{class_id}` → fetch one
//! - `POST /classes` → create
//! - `PUT /classes` → replace (id in body)
//! - `DELETE /classes/{class_id}` → delete; students in the class become unassigned

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use util::state::AppState;

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_class;
use get::{get_class, list_classes};
use post::create_class;
use put::update_class;

pub fn classes_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_classes))
        .route("/", post(create_class))
        .route("/", put(update_class))
        .route("/{class_id}", get(get_class))
        .route("/{class_id}", delete(delete_class))
}
