use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use rand::{RngCore, rngs::OsRng};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, FromJsonQueryResult, QueryFilter};
use serde::{Deserialize, Serialize};

use crate::filters::UserFilter;

/// Role labels attached to a user, stored as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct Roles(pub Vec<String>);

/// Represents a staff account in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub username: String,
    /// Argon2 PHC string. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Opaque bearer credential. Only handed out by the auth routes.
    #[serde(skip_serializing)]
    #[sea_orm(unique)]
    pub token: String,
    pub contact: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub roles: Roles,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::vaccination_drive::Entity")]
    VaccinationDrive,
    #[sea_orm(has_many = "super::vaccination_record::Entity")]
    VaccinationRecord,
}

impl Related<super::vaccination_drive::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VaccinationDrive.def()
    }
}

impl Related<super::vaccination_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VaccinationRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields accepted when creating or replacing a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub contact: Option<String>,
    pub roles: Vec<String>,
}

/// Replacement fields for an existing user; `password: None` keeps the current hash.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub username: String,
    pub password: Option<String>,
    pub contact: Option<String>,
    pub roles: Vec<String>,
}

impl Model {
    pub async fn create(db: &DatabaseConnection, new: NewUser) -> Result<Model, DbErr> {
        let hash = Self::hash_password(&new.password)?;

        ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            username: Set(new.username.trim().to_string()),
            password_hash: Set(hash),
            token: Set(Self::generate_token()),
            contact: Set(new.contact),
            roles: Set(Roles(new.roles)),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: &str,
        update: UserUpdate,
    ) -> Result<Option<Model>, DbErr> {
        let Some(existing) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = existing.into();
        active.username = Set(update.username.trim().to_string());
        active.contact = Set(update.contact);
        active.roles = Set(Roles(update.roles));
        if let Some(password) = update.password {
            active.password_hash = Set(Self::hash_password(&password)?);
        }

        active.update(db).await.map(Some)
    }

    /// Returns `true` when a row was removed.
    pub async fn delete(db: &DatabaseConnection, id: &str) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn find_by_username(
        db: &DatabaseConnection,
        username: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Username.eq(username.trim()))
            .one(db)
            .await
    }

    /// Resolves a bearer token to its owner.
    ///
    /// The row is located by index and the stored value is re-checked with a
    /// constant-time comparison before it is trusted.
    pub async fn find_by_token(
        db: &DatabaseConnection,
        token: &str,
    ) -> Result<Option<Model>, DbErr> {
        let found = Entity::find()
            .filter(Column::Token.eq(token))
            .one(db)
            .await?;

        Ok(found.filter(|user| constant_time_eq(user.token.as_bytes(), token.as_bytes())))
    }

    pub async fn list(db: &DatabaseConnection, filter: &UserFilter) -> Result<Vec<Model>, DbErr> {
        Entity::find().filter(filter.condition()).all(db).await
    }

    /// Checks the credentials and returns the matching user.
    pub async fn verify_credentials(
        db: &DatabaseConnection,
        username: &str,
        password: &str,
    ) -> Result<Option<Model>, DbErr> {
        let user = Self::find_by_username(db, username).await?;
        Ok(user.filter(|u| u.verify_password(password)))
    }

    /// Overwrites the stored token, revoking the previous one.
    pub async fn rotate_token(self, db: &DatabaseConnection) -> Result<Model, DbErr> {
        let mut active: ActiveModel = self.into();
        active.token = Set(Self::generate_token());
        active.update(db).await
    }

    pub fn hash_password(password: &str) -> Result<String, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DbErr::Custom(format!("password hashing failed: {}", e)))
    }

    pub fn verify_password(&self, password: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.password_hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    /// 32 random bytes, hex encoded.
    pub fn generate_token() -> String {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
