//! # Students Routes Module
//!
//! - `GET /students` → list with filters
//! - `GET /students/{student_id}` → fetch one, with its class
//! - `POST /students` → enroll
//! - `PUT /students` → replace (id in body)
//! - `DELETE /students/{student_id}` → delete, along with the student's records
//! - `POST /students/upload` → bulk import from a CSV file

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
pub mod upload;

use delete::delete_student;
use get::{get_student, list_students};
use post::create_student;
use put::update_student;
use upload::upload_students;

pub fn students_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students))
        .route("/", post(create_student))
        .route("/", put(update_student))
        .route("/upload", post(upload_students))
        .route("/{student_id}", get(get_student))
        .route("/{student_id}", delete(delete_student))
}
