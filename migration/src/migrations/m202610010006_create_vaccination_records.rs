use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202610010006_create_vaccination_records"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("vaccination_records"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).string().not_null().primary_key())
                    .col(ColumnDef::new(Alias::new("student_id")).string().not_null())
                    .col(ColumnDef::new(Alias::new("date")).date().not_null())
                    .col(ColumnDef::new(Alias::new("drive_id")).string().null())
                    .col(ColumnDef::new(Alias::new("vaccine_id")).string().not_null())
                    .col(ColumnDef::new(Alias::new("administered_by")).string().null())
                    .col(ColumnDef::new(Alias::new("batch_id")).string().null())
                    .col(ColumnDef::new(Alias::new("notes")).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("vaccination_records"), Alias::new("student_id"))
                            .to(Alias::new("students"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("vaccination_records"), Alias::new("vaccine_id"))
                            .to(Alias::new("vaccines"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("vaccination_records"), Alias::new("drive_id"))
                            .to(Alias::new("vaccination_drives"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("vaccination_records"), Alias::new("administered_by"))
                            .to(Alias::new("users"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .index(
                        Index::create()
                            .name("uq_records_student_vaccine")
                            .col(Alias::new("student_id"))
                            .col(Alias::new("vaccine_id"))
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("vaccination_records")).to_owned())
            .await
    }
}
