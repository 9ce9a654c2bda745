use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, FromJsonQueryResult, QueryFilter};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::filters::VaccineFilter;

/// One received lot of a vaccine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub batch_id: String,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub received_date: Option<NaiveDate>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct Batches(pub Vec<Batch>);

/// Inventory entry for a vaccine product.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "vaccines")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub manufacturer: Option<String>,
    pub dosage: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub storage_requirements: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub batches: Batches,
    pub doses_per_vial: Option<i32>,
    pub vaccine_type: Option<String>,
    pub administer_before: Option<NaiveDate>,
    pub country_of_origin: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub package_insert: Option<String>,
    pub number_of_vials: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::vaccination_record::Entity")]
    VaccinationRecord,
}

impl Related<super::vaccination_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VaccinationRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default)]
pub struct NewVaccine {
    pub name: String,
    pub manufacturer: Option<String>,
    pub dosage: Option<String>,
    pub description: Option<String>,
    pub storage_requirements: Option<String>,
    pub batches: Vec<Batch>,
    pub doses_per_vial: Option<i32>,
    pub vaccine_type: Option<String>,
    pub administer_before: Option<NaiveDate>,
    pub country_of_origin: Option<String>,
    pub package_insert: Option<String>,
    pub number_of_vials: Option<i32>,
}

impl NewVaccine {
    fn into_active_model(self, id: String) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            name: Set(self.name),
            manufacturer: Set(self.manufacturer),
            dosage: Set(self.dosage),
            description: Set(self.description),
            storage_requirements: Set(self.storage_requirements),
            batches: Set(Batches(self.batches)),
            doses_per_vial: Set(self.doses_per_vial),
            vaccine_type: Set(self.vaccine_type),
            administer_before: Set(self.administer_before),
            country_of_origin: Set(self.country_of_origin),
            package_insert: Set(self.package_insert),
            number_of_vials: Set(self.number_of_vials),
        }
    }
}

impl Model {
    pub async fn create(db: &DatabaseConnection, new: NewVaccine) -> Result<Model, DbErr> {
        new.into_active_model(Uuid::new_v4().to_string())
            .insert(db)
            .await
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: &str,
        new: NewVaccine,
    ) -> Result<Option<Model>, DbErr> {
        if Entity::find_by_id(id).one(db).await?.is_none() {
            return Ok(None);
        }
        new.into_active_model(id.to_string()).update(db).await.map(Some)
    }

    /// Appends a received batch to the end of the vaccine's batch list.
    pub async fn add_batch(
        db: &DatabaseConnection,
        id: &str,
        batch: Batch,
    ) -> Result<Option<Model>, DbErr> {
        let Some(existing) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut batches = existing.batches.clone();
        batches.0.push(batch);

        let mut active: ActiveModel = existing.into();
        active.batches = Set(batches);
        active.update(db).await.map(Some)
    }

    pub async fn delete(db: &DatabaseConnection, id: &str) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Looks up every id and returns the vaccines in the order of `ids`.
    /// Ids without a matching row are skipped.
    pub async fn find_in_order(
        db: &DatabaseConnection,
        ids: &[String],
    ) -> Result<Vec<Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found: HashMap<String, Model> = Entity::find()
            .filter(Column::Id.is_in(ids.iter().cloned()))
            .all(db)
            .await?
            .into_iter()
            .map(|v| (v.id.clone(), v))
            .collect();

        Ok(ids.iter().filter_map(|id| found.get(id).cloned()).collect())
    }

    pub async fn list(
        db: &DatabaseConnection,
        filter: &VaccineFilter,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find().filter(filter.condition()).all(db).await
    }
}
