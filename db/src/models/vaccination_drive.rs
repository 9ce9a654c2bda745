use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, FromJsonQueryResult, QueryFilter};
use serde::{Deserialize, Serialize};

use crate::analytics::DriveStatus;
use crate::filters::DriveFilter;

/// A list of entity ids kept as a JSON array (target classes, vaccines).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct IdList(pub Vec<String>);

/// A scheduled vaccination campaign.
///
/// `status` is an editable label only. The temporal state used for filtering
/// and dashboards is [`Model::computed_status`], derived from the dates.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "vaccination_drives")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub created_by: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub target_classes: IdList,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub status: Option<String>,
    #[sea_orm(column_type = "Json")]
    #[serde(rename = "vaccineIds")]
    pub vaccines: IdList,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(has_many = "super::vaccination_record::Entity")]
    VaccinationRecord,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::vaccination_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VaccinationRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone)]
pub struct NewDrive {
    pub name: String,
    pub created_by: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Option<String>,
    pub target_classes: Vec<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub vaccines: Vec<String>,
}

impl NewDrive {
    fn into_active_model(self, id: String) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            name: Set(self.name),
            created_by: Set(self.created_by),
            start_date: Set(self.start_date),
            end_date: Set(self.end_date),
            location: Set(self.location),
            target_classes: Set(IdList(self.target_classes)),
            notes: Set(self.notes),
            status: Set(self.status),
            vaccines: Set(IdList(self.vaccines)),
        }
    }
}

impl Model {
    pub async fn create(db: &DatabaseConnection, new: NewDrive) -> Result<Model, DbErr> {
        new.into_active_model(Uuid::new_v4().to_string())
            .insert(db)
            .await
    }

    /// Replaces a drive. A `created_by` of `None` keeps the stored creator.
    pub async fn update(
        db: &DatabaseConnection,
        id: &str,
        mut new: NewDrive,
    ) -> Result<Option<Model>, DbErr> {
        let Some(existing) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        if new.created_by.is_none() {
            new.created_by = existing.created_by;
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

    /// Lists drives in storage order. The status filter is evaluated against `now`,
    /// so the same call can return different drives as time passes.
    pub async fn list(
        db: &DatabaseConnection,
        filter: &DriveFilter,
        now: DateTime<Utc>,
    ) -> Result<Vec<Model>, DbErr> {
        let drives = Entity::find().filter(filter.condition()).all(db).await?;

        Ok(match filter.status {
            Some(status) => drives
                .into_iter()
                .filter(|d| d.computed_status(now) == status)
                .collect(),
            None => drives,
        })
    }

    pub async fn all(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(db).await
    }

    pub fn computed_status(&self, now: DateTime<Utc>) -> DriveStatus {
        DriveStatus::at(now, self.start_date, self.end_date)
    }
}
