//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → health check (public)
//! - `/auth` → registration and login (public); token rotation and profile (authenticated)
//! - `/users`, `/classes`, `/students`, `/vaccines`, `/drives`, `/records` → resource CRUD (authenticated)
//! - `/dashboard` → aggregate coverage figures (authenticated)

use axum::{Router, middleware::from_fn_with_state};
use util::state::AppState;

use crate::auth::guards::allow_authenticated;
use crate::routes::{
    auth::auth_routes, classes::classes_routes, dashboard::dashboard_routes,
    drives::drives_routes, health::health_routes, records::records_routes,
    students::students_routes, users::users_routes, vaccines::vaccines_routes,
};

pub mod auth;
pub mod classes;
pub mod common;
pub mod dashboard;
pub mod drives;
pub mod health;
pub mod records;
pub mod students;
pub mod users;
pub mod vaccines;

/// Builds the complete application router.
///
/// Everything except `/health`, `/auth/register`, and `/auth/login` sits behind
/// [`allow_authenticated`], so an unauthenticated request is rejected before any
/// handler or store access runs.
pub fn routes(app_state: AppState) -> Router {
    let protected = Router::new()
        .nest("/users", users_routes())
        .nest("/classes", classes_routes())
        .nest("/students", students_routes())
        .nest("/vaccines", vaccines_routes())
        .nest("/drives", drives_routes())
        .nest("/records", records_routes())
        .nest("/dashboard", dashboard_routes())
        .route_layer(from_fn_with_state(app_state.clone(), allow_authenticated));

    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes(app_state.clone()))
        .merge(protected)
        .with_state(app_state)
}
