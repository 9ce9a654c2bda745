use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, DatabaseTransaction, QueryFilter, SqlErr, TransactionTrait};
use serde::Serialize;
use thiserror::Error;

use crate::filters::RecordFilter;

/// One administered dose.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "vaccination_records")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub student_id: String,
    pub date: NaiveDate,
    pub drive_id: Option<String>,
    pub vaccine_id: String,
    pub administered_by: Option<String>,
    pub batch_id: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::vaccine::Entity",
        from = "Column::VaccineId",
        to = "super::vaccine::Column::Id",
        on_delete = "Cascade"
    )]
    Vaccine,
    #[sea_orm(
        belongs_to = "super::vaccination_drive::Entity",
        from = "Column::DriveId",
        to = "super::vaccination_drive::Column::Id",
        on_delete = "SetNull"
    )]
    VaccinationDrive,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AdministeredBy",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    User,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::vaccine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vaccine.def()
    }
}

impl Related<super::vaccination_drive::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VaccinationDrive.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("student {student_id} already has a record for vaccine {vaccine_id}")]
    Duplicate {
        student_id: String,
        vaccine_id: String,
    },
    #[error(transparent)]
    Db(#[from] DbErr),
}

#[derive(Debug, Clone)]
pub struct NewRecord {
    pub student_id: String,
    pub date: NaiveDate,
    pub drive_id: Option<String>,
    pub vaccine_id: String,
    pub administered_by: Option<String>,
    pub batch_id: Option<String>,
    pub notes: Option<String>,
}

impl NewRecord {
    fn into_active_model(self, id: String) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            student_id: Set(self.student_id),
            date: Set(self.date),
            drive_id: Set(self.drive_id),
            vaccine_id: Set(self.vaccine_id),
            administered_by: Set(self.administered_by),
            batch_id: Set(self.batch_id),
            notes: Set(self.notes),
        }
    }

    fn duplicate(&self) -> RecordError {
        RecordError::Duplicate {
            student_id: self.student_id.clone(),
            vaccine_id: self.vaccine_id.clone(),
        }
    }
}

/// Any other record for the same (student, vaccine) pair, excluding `except_id`.
async fn existing_pair(
    txn: &DatabaseTransaction,
    new: &NewRecord,
    except_id: Option<&str>,
) -> Result<Option<Model>, DbErr> {
    let mut query = Entity::find()
        .filter(Column::StudentId.eq(new.student_id.as_str()))
        .filter(Column::VaccineId.eq(new.vaccine_id.as_str()));
    if let Some(id) = except_id {
        query = query.filter(Column::Id.ne(id));
    }
    query.one(txn).await
}

fn map_unique(err: DbErr, new: &NewRecord) -> RecordError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => new.duplicate(),
        _ => RecordError::Db(err),
    }
}

impl Model {
    /// Inserts a record unless the student already has one for this vaccine.
    ///
    /// The lookup and insert share a transaction and the table carries a unique
    /// index on (student_id, vaccine_id); a violation of either is `Duplicate`.
    pub async fn create(db: &DatabaseConnection, new: NewRecord) -> Result<Model, RecordError> {
        let txn = db.begin().await?;

        if existing_pair(&txn, &new, None).await?.is_some() {
            return Err(new.duplicate());
        }

        let inserted = new
            .clone()
            .into_active_model(Uuid::new_v4().to_string())
            .insert(&txn)
            .await
            .map_err(|e| map_unique(e, &new))?;

        txn.commit().await?;
        Ok(inserted)
    }

    /// Replaces a record. Moving it onto a (student, vaccine) pair that another
    /// record already holds is rejected as `Duplicate`. An `administered_by` of
    /// `None` keeps the stored value.
    pub async fn update(
        db: &DatabaseConnection,
        id: &str,
        mut new: NewRecord,
    ) -> Result<Option<Model>, RecordError> {
        let txn = db.begin().await?;

        let Some(existing) = Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };
        if new.administered_by.is_none() {
            new.administered_by = existing.administered_by;
        }
        if existing_pair(&txn, &new, Some(id)).await?.is_some() {
            return Err(new.duplicate());
        }

        let updated = new
            .clone()
            .into_active_model(id.to_string())
            .update(&txn)
            .await
            .map_err(|e| map_unique(e, &new))?;

        txn.commit().await?;
        Ok(Some(updated))
    }

    pub async fn delete(db: &DatabaseConnection, id: &str) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn list(
        db: &DatabaseConnection,
        filter: &RecordFilter,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find().filter(filter.condition()).all(db).await
    }

    pub async fn all(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(db).await
    }
}
