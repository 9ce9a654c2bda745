//! # Records Routes Module
//!
//! - `GET /records` → list with filters
//! - `GET /records/{record_id}` → fetch one
//! - `POST /records` → log an administered dose (one per student and vaccine)
//! - `PUT /records` → replace (id in body)
//! - `DELETE /records/{record_id}` → remove a mistaken entry

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

use delete::delete_record;
use get::{get_record, list_records};
use post::create_record;
use put::update_record;

pub fn records_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_records))
        .route("/", post(create_record))
        .route("/", put(update_record))
        .route("/{record_id}", get(get_record))
        .route("/{record_id}", delete(delete_record))
}
