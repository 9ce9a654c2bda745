use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, QueryFilter};
use serde::Serialize;

use crate::filters::ClassFilter;

/// A class/section students are enrolled in; drives target classes by id.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "classes")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub section: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student::Entity")]
    Student,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        name: &str,
        section: Option<String>,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(name.to_string()),
            section: Set(section),
        }
        .insert(db)
        .await
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: &str,
        name: &str,
        section: Option<String>,
    ) -> Result<Option<Model>, DbErr> {
        if Entity::find_by_id(id).one(db).await?.is_none() {
            return Ok(None);
        }

        ActiveModel {
            id: Set(id.to_string()),
            name: Set(name.to_string()),
            section: Set(section),
        }
        .update(db)
        .await
        .map(Some)
    }

    pub async fn delete(db: &DatabaseConnection, id: &str) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn list(db: &DatabaseConnection, filter: &ClassFilter) -> Result<Vec<Model>, DbErr> {
        Entity::find().filter(filter.condition()).all(db).await
    }
}
