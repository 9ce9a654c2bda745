use crate::seed::Seeder;
use db::models::user::{Model, NewUser};
use fake::{Fake, faker::phone_number::en::PhoneNumber};
use sea_orm::{DatabaseConnection, DbErr};

pub struct UserSeeder;

#[async_trait::async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        // Fixed admin account
        if Model::find_by_username(db, "admin").await?.is_none() {
            Model::create(
                db,
                NewUser {
                    username: "admin".into(),
                    password: "admin1234".into(),
                    contact: None,
                    roles: vec!["admin".into()],
                },
            )
            .await?;
        }

        // Nursing staff
        for i in 1..=3 {
            let username = format!("nurse{:02}", i);
            if Model::find_by_username(db, &username).await?.is_some() {
                continue;
            }
            Model::create(
                db,
                NewUser {
                    username,
                    password: "password123".into(),
                    contact: Some(PhoneNumber().fake()),
                    roles: vec!["nurse".into()],
                },
            )
            .await?;
        }

        Ok(())
    }
}
