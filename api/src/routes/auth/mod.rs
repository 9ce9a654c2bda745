//! # Auth Routes Module
//!
//! - `POST /auth/register` → create an account and receive its token (public)
//! - `POST /auth/login` → exchange credentials for the account's token (public)
//! - `POST /auth/rotate` → replace the caller's token (authenticated)
//! - `GET /auth/me` → the caller's profile (authenticated)

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use util::state::AppState;

use crate::auth::guards::allow_authenticated;

pub mod get;
pub mod post;

use get::me;
use post::{login, register, rotate_token};

pub fn auth_routes(app_state: AppState) -> Router<AppState> {
    let authenticated = Router::new()
        .route("/rotate", post(rotate_token))
        .route("/me", get(me))
        .route_layer(from_fn_with_state(app_state, allow_authenticated));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(authenticated)
}
