use axum::{
    Json,
    body::Body,
    extract::{FromRequestParts, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::TypedHeader;
use db::models::user;
use headers::{Authorization, authorization::Bearer};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, Empty};

type Rejection = (StatusCode, Json<ApiResponse<Empty>>);

fn reject(status: StatusCode, message: &str) -> Rejection {
    (status, Json(ApiResponse::error(message)))
}

/// Gate for every protected route.
///
/// - No `Authorization: Bearer <token>` header, or a malformed one → `401 Unauthorized`
/// - A well-formed token that matches no user → `403 Forbidden`
///
/// On success the owning user is stored in the request extensions as [`AuthUser`].
/// Rejected requests never reach the handler.
pub async fn allow_authenticated(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Rejection> {
    let (mut parts, body) = req.into_parts();

    let TypedHeader(Authorization(bearer)) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(&mut parts, &())
            .await
            .map_err(|_| reject(StatusCode::UNAUTHORIZED, "Missing or invalid token"))?;

    let token = bearer.token();
    if token.is_empty() {
        return Err(reject(StatusCode::UNAUTHORIZED, "Missing or invalid token"));
    }

    let user = match user::Model::find_by_token(app_state.db(), token).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::warn!(path = %parts.uri.path(), "Rejected unknown bearer token");
            return Err(reject(StatusCode::FORBIDDEN, "Unauthorized token"));
        }
        Err(e) => {
            tracing::error!(error = %e, "Token lookup failed");
            return Err(reject(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to verify token",
            ));
        }
    };

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(AuthUser(user));
    Ok(next.run(req).await)
}
