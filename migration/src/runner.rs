use colored::*;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

/// Applies every pending migration one step at a time, printing a status line per step.
pub async fn run_pending_migrations(url: &str) -> Result<(), sea_orm::DbErr> {
    let db = sea_orm::Database::connect(url).await?;

    println!("Running migrations...");
    let pending = Migrator::get_pending_migrations(&db).await?;
    if pending.is_empty() {
        println!("{}", "Nothing to apply".dimmed());
        return Ok(());
    }

    for migration in pending {
        run_step(&db, migration.name()).await?;
    }
    Ok(())
}

async fn run_step(db: &DatabaseConnection, name: &str) -> Result<(), sea_orm::DbErr> {
    let name_str = format!("Applying {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name_str.len()));
    print!("{}{} ", name_str, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    match Migrator::up(db, Some(1)).await {
        Ok(()) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
            Ok(())
        }
        Err(e) => {
            println!("{}", "failed".red());
            Err(e)
        }
    }
}
