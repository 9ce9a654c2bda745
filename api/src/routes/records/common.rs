use axum::{http::StatusCode, response::Response};
use chrono::NaiveDate;
use db::models::{
    student, user, vaccination_drive,
    vaccination_record::{self, NewRecord, RecordError},
    vaccine,
};
use sea_orm::{DatabaseConnection, DbErr};
use serde::{Deserialize, Serialize};

use crate::routes::common::{bad_request, db_error, error_response};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRequest {
    pub student_id: String,
    pub date: NaiveDate,
    pub drive_id: Option<String>,
    pub vaccine_id: String,
    /// Defaults to the caller on create; kept as stored on replace.
    pub administered_by: Option<String>,
    pub batch_id: Option<String>,
    pub notes: Option<String>,
}

impl RecordRequest {
    /// A missing `administered_by` becomes `default_administrator`.
    pub fn into_new_record(self, default_administrator: Option<&str>) -> NewRecord {
        NewRecord {
            student_id: self.student_id,
            date: self.date,
            drive_id: self.drive_id.filter(|d| !d.trim().is_empty()),
            vaccine_id: self.vaccine_id,
            administered_by: self
                .administered_by
                .filter(|a| !a.trim().is_empty())
                .or_else(|| default_administrator.map(str::to_string)),
            batch_id: self.batch_id,
            notes: self.notes,
        }
    }
}

/// A record with the student and vaccine it refers to.
#[derive(Debug, Serialize)]
pub struct RecordResponse {
    #[serde(flatten)]
    pub record: vaccination_record::Model,
    pub student: Option<student::Model>,
    pub vaccine: Option<vaccine::Model>,
}

impl RecordResponse {
    pub async fn load(
        db: &DatabaseConnection,
        record: vaccination_record::Model,
    ) -> Result<Self, DbErr> {
        let student = student::Model::find_by_id(db, &record.student_id).await?;
        let vaccine = vaccine::Model::find_by_id(db, &record.vaccine_id).await?;
        Ok(Self {
            record,
            student,
            vaccine,
        })
    }
}

/// Student, vaccine, and (when given) drive and administering user must all exist.
pub async fn check_references(db: &DatabaseConnection, new: &NewRecord) -> Result<(), Response> {
    match student::Model::find_by_id(db, &new.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Err(bad_request(format!("Student '{}' does not exist", new.student_id))),
        Err(e) => return Err(db_error(e)),
    }
    match vaccine::Model::find_by_id(db, &new.vaccine_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Err(bad_request(format!("Vaccine '{}' does not exist", new.vaccine_id))),
        Err(e) => return Err(db_error(e)),
    }
    if let Some(drive_id) = new.drive_id.as_deref() {
        match vaccination_drive::Model::find_by_id(db, drive_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(bad_request(format!("Drive '{}' does not exist", drive_id))),
            Err(e) => return Err(db_error(e)),
        }
    }
    if let Some(user_id) = new.administered_by.as_deref() {
        match user::Model::find_by_id(db, user_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(bad_request(format!("User '{}' does not exist", user_id))),
            Err(e) => return Err(db_error(e)),
        }
    }
    Ok(())
}

pub fn record_error(err: RecordError) -> Response {
    match err {
        RecordError::Duplicate { .. } => error_response(
            StatusCode::CONFLICT,
            "Student has already been vaccinated with this vaccine",
        ),
        RecordError::Db(e) => db_error(e),
    }
}
