use axum::response::Response;
use chrono::NaiveDate;
use db::models::{
    school_class,
    student::{self, Guardian, NewStudent},
};
use sea_orm::{DatabaseConnection, DbErr};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

use crate::routes::common::{bad_request, db_error};

/// Create/replace payload. `rollNumber` also accepts the import-file spelling `StudentID`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequest {
    #[validate(length(min = 1, message = "Student name is required"))]
    pub name: String,
    pub class_id: Option<String>,
    #[serde(alias = "StudentID")]
    pub roll_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub guardians: Vec<Guardian>,
}

impl From<StudentRequest> for NewStudent {
    fn from(req: StudentRequest) -> Self {
        NewStudent {
            name: req.name.trim().to_string(),
            class_id: req.class_id.filter(|c| !c.trim().is_empty()),
            roll_number: req.roll_number,
            date_of_birth: req.date_of_birth,
            guardians: req.guardians,
        }
    }
}

/// A student with its class resolved (`null` when unassigned or the class is gone).
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    #[serde(flatten)]
    pub student: student::Model,
    pub class: Option<school_class::Model>,
}

impl StudentResponse {
    pub async fn load(db: &DatabaseConnection, student: student::Model) -> Result<Self, DbErr> {
        let class = student.class(db).await?;
        Ok(Self { student, class })
    }

    /// Hydrates a page of students with one class query.
    pub async fn load_many(
        db: &DatabaseConnection,
        students: Vec<student::Model>,
    ) -> Result<Vec<Self>, DbErr> {
        let classes: HashMap<String, school_class::Model> =
            school_class::Model::list(db, &Default::default())
                .await?
                .into_iter()
                .map(|c| (c.id.clone(), c))
                .collect();

        Ok(students
            .into_iter()
            .map(|student| {
                let class = student
                    .class_id
                    .as_ref()
                    .and_then(|id| classes.get(id).cloned());
                Self { student, class }
            })
            .collect())
    }
}

/// Rejects a class reference that does not resolve.
pub async fn ensure_class_exists(
    db: &DatabaseConnection,
    class_id: Option<&str>,
) -> Result<(), Response> {
    let Some(class_id) = class_id else {
        return Ok(());
    };
    match school_class::Model::find_by_id(db, class_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(bad_request(format!("Class '{}' does not exist", class_id))),
        Err(e) => Err(db_error(e)),
    }
}
