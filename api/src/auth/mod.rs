//! Bearer-token authentication.
//!
//! Tokens are opaque per-user strings stored on the `users` row. There is no
//! expiry; a token stops working only when it is rotated.

pub mod guards;
pub mod middleware;

use db::models::user;

/// The authenticated caller, inserted into request extensions by
/// [`guards::allow_authenticated`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub user::Model);
