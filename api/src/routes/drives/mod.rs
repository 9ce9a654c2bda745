//! # Drives Routes Module
//!
//! - `GET /drives` → list, filterable by computed status, target class, vaccine name
//! - `GET /drives/{drive_id}` → one drive with coverage statistics
//! - `POST /drives` → schedule a drive
//! - `PUT /drives` → replace (id in body)
//! - `DELETE /drives/{drive_id}` → delete; its records keep existing without a drive

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_drive;
use get::{get_drive, list_drives};
use post::create_drive;
use put::update_drive;

pub fn drives_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_drives))
        .route("/", post(create_drive))
        .route("/", put(update_drive))
        .route("/{drive_id}", get(get_drive))
        .route("/{drive_id}", delete(delete_drive))
}
