use crate::seed::Seeder;
use db::models::school_class::Model;
use sea_orm::{DatabaseConnection, DbErr};

pub struct ClassSeeder;

#[async_trait::async_trait]
impl Seeder for ClassSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        for grade in 1..=6 {
            for section in ["A", "B"] {
                Model::create(db, &format!("Grade {}", grade), Some(section.to_string())).await?;
            }
        }
        Ok(())
    }
}
