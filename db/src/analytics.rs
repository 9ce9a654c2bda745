//! Coverage statistics derived from drives, students, and vaccination records.
//!
//! Everything here is recomputed from freshly loaded rows on every call. The pure
//! functions (`DriveStatus::at`, [`drive_stats`], [`summarize`]) take the rows as
//! input; the async wrappers only load them.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DbErr};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::models::{student, vaccination_drive, vaccination_record};

/// Temporal state of a drive relative to a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriveStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl DriveStatus {
    /// `upcoming` when the drive starts after `now`, `completed` when it ended
    /// before `now`, `ongoing` otherwise (both bounds inclusive).
    pub fn at(now: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        if start > now {
            DriveStatus::Upcoming
        } else if end < now {
            DriveStatus::Completed
        } else {
            DriveStatus::Ongoing
        }
    }
}

impl fmt::Display for DriveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DriveStatus::Upcoming => "upcoming",
            DriveStatus::Ongoing => "ongoing",
            DriveStatus::Completed => "completed",
        };
        write!(f, "{s}")
    }
}

impl FromStr for DriveStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Ok(DriveStatus::Upcoming),
            "ongoing" => Ok(DriveStatus::Ongoing),
            "completed" => Ok(DriveStatus::Completed),
            other => Err(format!(
                "Invalid status '{other}', expected one of: upcoming, ongoing, completed"
            )),
        }
    }
}

/// Coverage figures for a single drive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveStats {
    /// Students whose class is one of the drive's target classes.
    pub registered_students: u64,
    /// Distinct registered students with at least one record in this drive.
    pub vaccinated_students: u64,
    /// `registered_students × number of vaccines in the drive`.
    pub expected_total_doses: u64,
    /// Every record tagged with this drive, including ones for students
    /// outside the target classes or no longer on the roster.
    pub total_vaccination_records: u64,
    /// `total_vaccination_records / expected_total_doses × 100`, two decimals, 0 if nothing is expected.
    pub percent_vaccinated: f64,
}

/// Aggregate figures for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_students: u64,
    pub vaccinated_students: u64,
    pub percent_vaccinated: f64,
    pub upcoming_drives: u64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `part / whole × 100` rounded to two decimals; 0 when `whole` is 0.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round2(part as f64 / whole as f64 * 100.0)
}

pub fn drive_stats(
    drive: &vaccination_drive::Model,
    students: &[student::Model],
    records: &[vaccination_record::Model],
) -> DriveStats {
    let target_classes: HashSet<&str> = drive.target_classes.0.iter().map(String::as_str).collect();

    let target_students: HashSet<&str> = students
        .iter()
        .filter(|s| {
            s.class_id
                .as_deref()
                .is_some_and(|class_id| target_classes.contains(class_id))
        })
        .map(|s| s.id.as_str())
        .collect();

    let drive_records: Vec<&vaccination_record::Model> = records
        .iter()
        .filter(|r| r.drive_id.as_deref() == Some(drive.id.as_str()))
        .collect();

    let vaccinated: HashSet<&str> = drive_records
        .iter()
        .map(|r| r.student_id.as_str())
        .filter(|id| target_students.contains(id))
        .collect();

    let registered_students = target_students.len() as u64;
    let expected_total_doses = registered_students * drive.vaccines.0.len() as u64;
    let total_vaccination_records = drive_records.len() as u64;

    DriveStats {
        registered_students,
        vaccinated_students: vaccinated.len() as u64,
        expected_total_doses,
        total_vaccination_records,
        percent_vaccinated: percentage(total_vaccination_records, expected_total_doses),
    }
}

/// Loads the full roster and record set and computes the drive's stats.
pub async fn compute_drive_stats(
    db: &DatabaseConnection,
    drive: &vaccination_drive::Model,
) -> Result<DriveStats, DbErr> {
    let students = student::Model::all(db).await?;
    let records = vaccination_record::Model::all(db).await?;
    Ok(drive_stats(drive, &students, &records))
}

pub fn summarize(
    students: &[student::Model],
    records: &[vaccination_record::Model],
    drives: &[vaccination_drive::Model],
    now: DateTime<Utc>,
) -> DashboardSummary {
    let roster: HashSet<&str> = students.iter().map(|s| s.id.as_str()).collect();
    let vaccinated: HashSet<&str> = records
        .iter()
        .map(|r| r.student_id.as_str())
        .filter(|id| roster.contains(id))
        .collect();

    let total_students = roster.len() as u64;
    let vaccinated_students = vaccinated.len() as u64;
    let upcoming_drives = drives
        .iter()
        .filter(|d| d.computed_status(now) == DriveStatus::Upcoming)
        .count() as u64;

    DashboardSummary {
        total_students,
        vaccinated_students,
        percent_vaccinated: percentage(vaccinated_students, total_students),
        upcoming_drives,
    }
}

pub async fn dashboard_summary(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
) -> Result<DashboardSummary, DbErr> {
    let students = student::Model::all(db).await?;
    let records = vaccination_record::Model::all(db).await?;
    let drives = vaccination_drive::Model::all(db).await?;
    Ok(summarize(&students, &records, &drives, now))
}
