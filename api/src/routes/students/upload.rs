use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{
    school_class,
    student::{self, Guardian, NewStudent},
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::{bad_request, parse_optional_date};

/// One line of the import file. Header: `name,classId,StudentID,dateOfBirth,guardians`.
#[derive(Debug, Deserialize)]
struct StudentCsvRow {
    #[serde(default)]
    name: String,
    #[serde(rename = "classId", default)]
    class_id: Option<String>,
    #[serde(rename = "StudentID", default)]
    roll_number: Option<String>,
    #[serde(rename = "dateOfBirth", default)]
    date_of_birth: Option<String>,
    /// JSON array of `{ "name", "phoneNumber" }`.
    #[serde(default)]
    guardians: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RowError {
    /// 1-based data row number (the header is not counted).
    pub row: usize,
    pub error: String,
}

#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub success_count: usize,
    pub error_count: usize,
    pub errors: Vec<RowError>,
}

impl ImportReport {
    fn fail(&mut self, row: usize, error: impl Into<String>) {
        self.error_count += 1;
        self.errors.push(RowError {
            row,
            error: error.into(),
        });
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl StudentCsvRow {
    fn into_new_student(self) -> Result<NewStudent, String> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err("Missing student name".into());
        }

        let date_of_birth = parse_optional_date(self.date_of_birth.as_deref())?;

        let guardians = match non_empty(self.guardians) {
            Some(raw) => serde_json::from_str::<Vec<Guardian>>(&raw)
                .map_err(|e| format!("Invalid guardians JSON: {}", e))?,
            None => Vec::new(),
        };

        Ok(NewStudent {
            name,
            class_id: non_empty(self.class_id),
            roll_number: non_empty(self.roll_number),
            date_of_birth,
            guardians,
        })
    }
}

/// Parses `bytes` as CSV and inserts every valid row. Bad rows are reported and
/// skipped; they never stop the rest of the file from being imported.
pub async fn import_students(db: &DatabaseConnection, bytes: &[u8]) -> ImportReport {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(bytes);

    let mut report = ImportReport::default();

    for (index, result) in reader.deserialize::<StudentCsvRow>().enumerate() {
        let row = index + 1;

        let new = match result
            .map_err(|e| format!("Unreadable row: {}", e))
            .and_then(StudentCsvRow::into_new_student)
        {
            Ok(new) => new,
            Err(msg) => {
                report.fail(row, msg);
                continue;
            }
        };

        if let Some(class_id) = new.class_id.as_deref() {
            match school_class::Model::find_by_id(db, class_id).await {
                Ok(Some(_)) => {}
                Ok(None) => {
                    report.fail(row, format!("Class '{}' does not exist", class_id));
                    continue;
                }
                Err(e) => {
                    report.fail(row, e.to_string());
                    continue;
                }
            }
        }

        match student::Model::create(db, new).await {
            Ok(_) => report.success_count += 1,
            Err(e) => report.fail(row, e.to_string()),
        }
    }

    report
}

/// POST /api/students/upload
///
/// Multipart form with a single `file` field holding CSV:
///
/// ```text
/// name,classId,StudentID,dateOfBirth,guardians
/// Ada,a7d2…,R-17,2015-03-09,"[{""name"":""Grace"",""phoneNumber"":""555-0101""}]"
/// ```
///
/// Empty `classId`, `StudentID`, `dateOfBirth`, or `guardians` cells are treated as absent.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "successCount": 2,
///     "errorCount": 1,
///     "errors": [{ "row": 2, "error": "Invalid guardians JSON: …" }]
///   },
///   "message": "Processed 3 rows"
/// }
/// ```
/// - `400 Bad Request` when no `file` field is present or the form is malformed
pub async fn upload_students(State(app_state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut file = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some("file") => match field.bytes().await {
                Ok(bytes) => {
                    file = Some(bytes);
                    break;
                }
                Err(e) => return bad_request(format!("Failed to read uploaded file: {}", e)),
            },
            Ok(Some(_)) => continue,
            Ok(None) => break,
            Err(e) => return bad_request(format!("Malformed multipart body: {}", e)),
        }
    }

    let Some(bytes) = file else {
        return bad_request("No file uploaded");
    };

    let report = import_students(app_state.db(), &bytes).await;
    let total = report.success_count + report.error_count;
    tracing::info!(
        imported = report.success_count,
        failed = report.error_count,
        "Student import finished"
    );

    (
        StatusCode::OK,
        Json(ApiResponse::success(report, format!("Processed {} rows", total))),
    )
        .into_response()
}
