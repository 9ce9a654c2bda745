use crate::seed::Seeder;
use chrono::{Duration, Utc};
use db::models::{
    school_class, user,
    vaccination_drive::{Model, NewDrive},
    vaccine,
};
use sea_orm::{DatabaseConnection, DbErr};

pub struct DriveSeeder;

#[async_trait::async_trait]
impl Seeder for DriveSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let admin = user::Model::find_by_username(db, "admin").await?;
        let classes = school_class::Model::list(db, &Default::default()).await?;
        let vaccines = vaccine::Model::list(db, &Default::default()).await?;
        let now = Utc::now();

        // One completed, one ongoing, one upcoming drive
        let windows = [
            ("Spring catch-up", now - Duration::days(40), now - Duration::days(35), "completed"),
            ("Term immunisation", now - Duration::days(2), now + Duration::days(3), "in progress"),
            ("Autumn boosters", now + Duration::days(20), now + Duration::days(24), "planned"),
        ];

        for (i, (name, start, end, label)) in windows.into_iter().enumerate() {
            let target_classes = classes
                .iter()
                .skip(i * 4)
                .take(4)
                .map(|c| c.id.clone())
                .collect();
            let drive_vaccines = vaccines
                .iter()
                .skip(i * 2)
                .take(2)
                .map(|v| v.id.clone())
                .collect();

            Model::create(
                db,
                NewDrive {
                    name: name.into(),
                    created_by: admin.as_ref().map(|a| a.id.clone()),
                    start_date: start,
                    end_date: end,
                    location: Some("School hall".into()),
                    target_classes,
                    notes: None,
                    status: Some(label.into()),
                    vaccines: drive_vaccines,
                },
            )
            .await?;
        }

        Ok(())
    }
}
