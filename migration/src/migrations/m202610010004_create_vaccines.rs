use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202610010004_create_vaccines"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("vaccines"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).string().not_null().primary_key())
                    .col(ColumnDef::new(Alias::new("name")).string().not_null())
                    .col(ColumnDef::new(Alias::new("manufacturer")).string().null())
                    .col(ColumnDef::new(Alias::new("dosage")).string().null())
                    .col(ColumnDef::new(Alias::new("description")).text().null())
                    .col(ColumnDef::new(Alias::new("storage_requirements")).string().null())
                    .col(ColumnDef::new(Alias::new("batches")).json().not_null())
                    .col(ColumnDef::new(Alias::new("doses_per_vial")).integer().null())
                    .col(ColumnDef::new(Alias::new("vaccine_type")).string().null())
                    .col(ColumnDef::new(Alias::new("administer_before")).date().null())
                    .col(ColumnDef::new(Alias::new("country_of_origin")).string().null())
                    .col(ColumnDef::new(Alias::new("package_insert")).text().null())
                    .col(ColumnDef::new(Alias::new("number_of_vials")).integer().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("vaccines")).to_owned())
            .await
    }
}
