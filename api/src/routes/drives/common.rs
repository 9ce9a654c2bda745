use axum::response::Response;
use chrono::{DateTime, Utc};
use db::{
    analytics::{DriveStats, DriveStatus},
    models::{
        school_class, user,
        vaccination_drive::{self, NewDrive},
        vaccine,
    },
};
use sea_orm::{DatabaseConnection, DbErr};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::routes::common::{bad_request, db_error, parse_instant};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DriveRequest {
    #[validate(length(min = 1, message = "Drive name is required"))]
    pub name: String,
    /// Defaults to the caller on create; kept as stored on replace.
    pub created_by: Option<String>,
    /// `YYYY-MM-DD` (midnight UTC) or RFC 3339.
    pub start_date: String,
    pub end_date: String,
    pub location: Option<String>,
    #[serde(default)]
    pub target_classes: Vec<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
    #[serde(default, alias = "vaccines")]
    pub vaccine_ids: Vec<String>,
}

impl DriveRequest {
    /// Parses the dates. A missing `created_by` becomes `default_creator`.
    pub fn into_new_drive(self, default_creator: Option<&str>) -> Result<NewDrive, String> {
        let start_date = parse_instant(&self.start_date)?;
        let end_date = parse_instant(&self.end_date)?;

        Ok(NewDrive {
            name: self.name.trim().to_string(),
            created_by: self
                .created_by
                .filter(|c| !c.trim().is_empty())
                .or_else(|| default_creator.map(str::to_string)),
            start_date,
            end_date,
            location: self.location,
            target_classes: self.target_classes,
            notes: self.notes,
            status: self.status,
            vaccines: self.vaccine_ids,
        })
    }
}

/// A drive with its vaccine ids resolved, its live status, and (for single
/// fetches) its coverage numbers merged in.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveResponse {
    #[serde(flatten)]
    pub drive: vaccination_drive::Model,
    pub computed_status: DriveStatus,
    pub vaccines: Vec<vaccine::Model>,
    #[serde(flatten)]
    pub stats: Option<DriveStats>,
}

impl DriveResponse {
    pub async fn load(
        db: &DatabaseConnection,
        drive: vaccination_drive::Model,
        now: DateTime<Utc>,
    ) -> Result<Self, DbErr> {
        let vaccines = vaccine::Model::find_in_order(db, &drive.vaccines.0).await?;
        Ok(Self {
            computed_status: drive.computed_status(now),
            drive,
            vaccines,
            stats: None,
        })
    }

    pub fn with_stats(mut self, stats: DriveStats) -> Self {
        self.stats = Some(stats);
        self
    }
}

/// The creator, every target class, and every vaccine id must resolve.
pub async fn check_references(db: &DatabaseConnection, new: &NewDrive) -> Result<(), Response> {
    if let Some(user_id) = new.created_by.as_deref() {
        check_user(db, user_id).await?;
    }

    for class_id in &new.target_classes {
        match school_class::Model::find_by_id(db, class_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(bad_request(format!("Class '{}' does not exist", class_id))),
            Err(e) => return Err(db_error(e)),
        }
    }

    match vaccine::Model::find_in_order(db, &new.vaccines).await {
        Ok(found) if found.len() == new.vaccines.len() => Ok(()),
        Ok(found) => {
            let missing = new
                .vaccines
                .iter()
                .find(|id| !found.iter().any(|v| &v.id == *id))
                .cloned()
                .unwrap_or_default();
            Err(bad_request(format!("Vaccine '{}' does not exist", missing)))
        }
        Err(e) => Err(db_error(e)),
    }
}

/// 400 when `user_id` names no user.
async fn check_user(db: &DatabaseConnection, user_id: &str) -> Result<(), Response> {
    match user::Model::find_by_id(db, user_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(bad_request(format!("User '{}' does not exist", user_id))),
        Err(e) => Err(db_error(e)),
    }
}
