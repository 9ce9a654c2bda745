//! `GET /dashboard/summary`: roster-wide coverage at a glance.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use db::analytics;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::db_error;

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/summary", get(summary))
}

/// GET /api/dashboard/summary
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "totalStudents": 120,
///     "vaccinatedStudents": 87,
///     "percentVaccinated": 72.5,
///     "upcomingDrives": 2
///   },
///   "message": "Dashboard summary retrieved successfully"
/// }
/// ```
pub async fn summary(State(app_state): State<AppState>) -> Response {
    match analytics::dashboard_summary(app_state.db(), Utc::now()).await {
        Ok(summary) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                summary,
                "Dashboard summary retrieved successfully",
            )),
        )
            .into_response(),
        Err(e) => db_error(e),
    }
}
