pub mod auth;
pub mod extract;
pub mod response;
pub mod routes;
