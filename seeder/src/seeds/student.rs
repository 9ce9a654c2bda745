use crate::seed::Seeder;
use chrono::NaiveDate;
use db::models::{
    school_class,
    student::{Guardian, Model, NewStudent},
};
use fake::{
    Fake,
    faker::{
        name::en::{FirstName, LastName, Name},
        phone_number::en::PhoneNumber,
    },
};
use sea_orm::{DatabaseConnection, DbErr};

pub struct StudentSeeder;

const STUDENTS_PER_CLASS: usize = 8;

fn random_guardians() -> Vec<Guardian> {
    (0..fastrand::usize(1..=2))
        .map(|_| Guardian {
            name: Name().fake(),
            phone_number: PhoneNumber().fake(),
        })
        .collect()
}

#[async_trait::async_trait]
impl Seeder for StudentSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let classes = school_class::Model::list(db, &Default::default()).await?;
        let mut roll = 1;

        for class in &classes {
            for _ in 0..STUDENTS_PER_CLASS {
                let first: String = FirstName().fake();
                let last: String = LastName().fake();
                let date_of_birth = NaiveDate::from_ymd_opt(
                    fastrand::i32(2012..=2019),
                    fastrand::u32(1..=12),
                    fastrand::u32(1..=28),
                );

                Model::create(
                    db,
                    NewStudent {
                        name: format!("{} {}", first, last),
                        class_id: Some(class.id.clone()),
                        roll_number: Some(format!("R-{:04}", roll)),
                        date_of_birth,
                        guardians: random_guardians(),
                    },
                )
                .await?;
                roll += 1;
            }
        }

        // A few students not yet placed in a class
        for _ in 0..3 {
            Model::create(
                db,
                NewStudent {
                    name: Name().fake(),
                    roll_number: Some(format!("R-{:04}", roll)),
                    guardians: random_guardians(),
                    ..Default::default()
                },
            )
            .await?;
            roll += 1;
        }

        Ok(())
    }
}
