//! Helpers shared by every route group: error envelopes, validation messages,
//! and date parsing for query strings and request bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Deserializer};
use validator::ValidationErrors;

use crate::response::{ApiResponse, Empty};

/// Joins every field error message with `; `. Errors without a custom message
/// fall back to `<field>: <code>`.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(m) => m.to_string(),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Serde helper: strips surrounding whitespace so length checks see the stored value.
pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|s| s.trim().to_string())
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse::<Empty>::error(message))).into_response()
}

pub fn not_found(entity: &str) -> Response {
    error_response(StatusCode::NOT_FOUND, format!("{} not found", entity))
}

pub fn bad_request(message: impl Into<String>) -> Response {
    error_response(StatusCode::BAD_REQUEST, message)
}

/// Logs the store failure and answers 500.
pub fn db_error(err: DbErr) -> Response {
    tracing::error!(error = %err, "Database operation failed");
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Database error: {}", err),
    )
}

/// `YYYY-MM-DD`.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", value))
}

/// RFC 3339 timestamp, or a bare `YYYY-MM-DD` taken as midnight UTC.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| format!("Invalid date '{}', expected YYYY-MM-DD or RFC 3339", value))
}

pub fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, String> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => parse_date(v).map(Some),
        None => Ok(None),
    }
}
