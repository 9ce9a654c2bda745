use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    class::ClassSeeder, drive::DriveSeeder, record::RecordSeeder, student::StudentSeeder,
    user::UserSeeder, vaccine::VaccineSeeder,
};
use migration::{Migrator, MigratorTrait};

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to connect to {}: {}", util::config::database_path(), e);
            std::process::exit(1);
        }
    };
    if let Err(e) = Migrator::up(&db, None).await {
        eprintln!("Failed to apply migrations: {}", e);
        std::process::exit(1);
    }

    for (seeder, name) in [
        (Box::new(UserSeeder) as Box<dyn Seeder + Send + Sync>, "User"),
        (Box::new(ClassSeeder), "Class"),
        (Box::new(StudentSeeder), "Student"),
        (Box::new(VaccineSeeder), "Vaccine"),
        (Box::new(DriveSeeder), "Drive"),
        (Box::new(RecordSeeder), "Record"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
