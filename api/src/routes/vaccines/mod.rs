//! # Vaccines Routes Module
//!
//! - `GET /vaccines` → list with filters
//! - `GET /vaccines/{vaccine_id}` → fetch one
//! - `POST /vaccines` → register inventory
//! - `PUT /vaccines` → replace (id in body)
//! - `POST /vaccines/{vaccine_id}/batches` → append a received batch
//! - `DELETE /vaccines/{vaccine_id}` → delete, along with records for it

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

use delete::delete_vaccine;
use get::{get_vaccine, list_vaccines};
use post::{add_batch, create_vaccine};
use put::update_vaccine;

pub fn vaccines_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vaccines))
        .route("/", post(create_vaccine))
        .route("/", put(update_vaccine))
        .route("/{vaccine_id}", get(get_vaccine))
        .route("/{vaccine_id}", delete(delete_vaccine))
        .route("/{vaccine_id}/batches", post(add_batch))
}
