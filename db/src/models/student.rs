use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, FromJsonQueryResult, QueryFilter};
use serde::{Deserialize, Serialize};

use crate::filters::StudentFilter;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guardian {
    pub name: String,
    pub phone_number: String,
}

/// Ordered guardian list, stored as a JSON array on the student row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct Guardians(pub Vec<Guardian>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "students")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub class_id: Option<String>,
    /// School-issued roll number (the `StudentID` column of import files).
    pub roll_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    #[sea_orm(column_type = "Json")]
    pub guardians: Guardians,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::school_class::Entity",
        from = "Column::ClassId",
        to = "super::school_class::Column::Id",
        on_delete = "SetNull"
    )]
    SchoolClass,
    #[sea_orm(has_many = "super::vaccination_record::Entity")]
    VaccinationRecord,
}

impl Related<super::school_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SchoolClass.def()
    }
}

impl Related<super::vaccination_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VaccinationRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default)]
pub struct NewStudent {
    pub name: String,
    pub class_id: Option<String>,
    pub roll_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub guardians: Vec<Guardian>,
}

impl NewStudent {
    fn into_active_model(self, id: String) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            name: Set(self.name),
            class_id: Set(self.class_id),
            roll_number: Set(self.roll_number),
            date_of_birth: Set(self.date_of_birth),
            guardians: Set(Guardians(self.guardians)),
        }
    }
}

impl Model {
    pub async fn create(db: &DatabaseConnection, new: NewStudent) -> Result<Model, DbErr> {
        new.into_active_model(Uuid::new_v4().to_string())
            .insert(db)
            .await
    }

    /// Replaces every field of an existing student.
    pub async fn update(
        db: &DatabaseConnection,
        id: &str,
        new: NewStudent,
    ) -> Result<Option<Model>, DbErr> {
        if Entity::find_by_id(id).one(db).await?.is_none() {
            return Ok(None);
        }
        new.into_active_model(id.to_string()).update(db).await.map(Some)
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
        filter: &StudentFilter,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find().filter(filter.condition()).all(db).await
    }

    pub async fn all(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(db).await
    }

    /// The student's class, if it references one that still exists.
    pub async fn class(
        &self,
        db: &DatabaseConnection,
    ) -> Result<Option<super::school_class::Model>, DbErr> {
        match &self.class_id {
            Some(class_id) => super::school_class::Entity::find_by_id(class_id.as_str())
                .one(db)
                .await,
            None => Ok(None),
        }
    }
}
