use crate::seed::Seeder;
use chrono::Utc;
use db::analytics::DriveStatus;
use db::models::{
    student, user,
    vaccination_drive,
    vaccination_record::{Model, NewRecord, RecordError},
    vaccine,
};
use sea_orm::{DatabaseConnection, DbErr};

pub struct RecordSeeder;

/// Share of target students vaccinated per drive vaccine.
const COVERAGE: f64 = 0.7;

#[async_trait::async_trait]
impl Seeder for RecordSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let now = Utc::now();
        let nurse = user::Model::find_by_username(db, "nurse01").await?;
        let students = student::Model::all(db).await?;
        let drives = vaccination_drive::Model::all(db).await?;

        for drive in drives
            .iter()
            .filter(|d| d.computed_status(now) != DriveStatus::Upcoming)
        {
            let vaccines = vaccine::Model::find_in_order(db, &drive.vaccines.0).await?;
            let targets = students.iter().filter(|s| {
                s.class_id
                    .as_ref()
                    .is_some_and(|c| drive.target_classes.0.contains(c))
            });

            for student in targets {
                for vaccine in &vaccines {
                    if fastrand::f64() > COVERAGE {
                        continue;
                    }
                    let batch_id = vaccine.batches.0.first().map(|b| b.batch_id.clone());

                    let result = Model::create(
                        db,
                        NewRecord {
                            student_id: student.id.clone(),
                            date: drive.start_date.date_naive(),
                            drive_id: Some(drive.id.clone()),
                            vaccine_id: vaccine.id.clone(),
                            administered_by: nurse.as_ref().map(|n| n.id.clone()),
                            batch_id,
                            notes: None,
                        },
                    )
                    .await;

                    match result {
                        Ok(_) | Err(RecordError::Duplicate { .. }) => {}
                        Err(RecordError::Db(e)) => return Err(e),
                    }
                }
            }
        }

        Ok(())
    }
}
