use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::{filters::ClassFilter, models::school_class};
use serde::Deserialize;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::{db_error, not_found};

#[derive(Debug, Default, Deserialize)]
pub struct ListClassesQuery {
    pub name: Option<String>,
    pub section: Option<String>,
}

/// GET /api/classes
///
/// - `200 OK` with an array of `{ id, name, section }`
pub async fn list_classes(
    State(app_state): State<AppState>,
    Query(query): Query<ListClassesQuery>,
) -> Response {
    let mut filter = ClassFilter::new();
    if let Some(name) = query.name {
        filter = filter.with_name(name);
    }
    if let Some(section) = query.section {
        filter = filter.with_section(section);
    }

    match school_class::Model::list(app_state.db(), &filter).await {
        Ok(classes) => (
            StatusCode::OK,
            Json(ApiResponse::success(classes, "Classes retrieved successfully")),
        )
            .into_response(),
        Err(e) => db_error(e),
    }
}

/// GET /api/classes/{class_id}
pub async fn get_class(
    State(app_state): State<AppState>,
    Path(class_id): Path<String>,
) -> Response {
    match school_class::Model::find_by_id(app_state.db(), &class_id).await {
        Ok(Some(class)) => (
            StatusCode::OK,
            Json(ApiResponse::success(class, "Class retrieved successfully")),
        )
            .into_response(),
        Ok(None) => not_found("Class"),
        Err(e) => db_error(e),
    }
}
