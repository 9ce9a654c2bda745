use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202610010001_create_users::Migration),
            Box::new(migrations::m202610010002_create_classes::Migration),
            Box::new(migrations::m202610010003_create_students::Migration),
            Box::new(migrations::m202610010004_create_vaccines::Migration),
            Box::new(migrations::m202610010005_create_vaccination_drives::Migration),
            Box::new(migrations::m202610010006_create_vaccination_records::Migration),
        ]
    }
}
