//! Optional filter predicates for the list queries.
//!
//! Every filter starts empty (`Condition::all()` with nothing added matches every row)
//! and each `with_*` call narrows the result. Text filters marked "partial" are
//! case-insensitive substring matches; the rest compare exactly. Filters over JSON
//! sub-lists match when any element of the stored array equals the given value.

use chrono::NaiveDate;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, Condition};

use crate::analytics::DriveStatus;
use crate::models::{school_class, student, user, vaccination_record, vaccine};

#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Partial match.
    pub username: Option<String>,
    /// Partial match.
    pub contact: Option<String>,
    pub role: Option<String>,
}

impl UserFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_contact(mut self, contact: String) -> Self {
        self.contact = Some(contact);
        self
    }

    pub fn with_role(mut self, role: String) -> Self {
        self.role = Some(role);
        self
    }

    pub(crate) fn condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(username) = &self.username {
            condition = condition.add(user::Column::Username.contains(username));
        }
        if let Some(contact) = &self.contact {
            condition = condition.add(user::Column::Contact.contains(contact));
        }
        if let Some(role) = &self.role {
            condition = condition.add(Expr::cust_with_values(
                "EXISTS (SELECT 1 FROM json_each(users.roles) WHERE json_each.value = ?)",
                [role.clone()],
            ));
        }
        condition
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClassFilter {
    /// Partial match.
    pub name: Option<String>,
    pub section: Option<String>,
}

impl ClassFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_section(mut self, section: String) -> Self {
        self.section = Some(section);
        self
    }

    pub(crate) fn condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(name) = &self.name {
            condition = condition.add(school_class::Column::Name.contains(name));
        }
        if let Some(section) = &self.section {
            condition = condition.add(school_class::Column::Section.eq(section.clone()));
        }
        condition
    }
}

#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    /// Partial match.
    pub name: Option<String>,
    /// External roll number.
    pub roll_number: Option<String>,
    pub class_id: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub guardian_phone: Option<String>,
}

impl StudentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_roll_number(mut self, roll_number: String) -> Self {
        self.roll_number = Some(roll_number);
        self
    }

    pub fn with_class_id(mut self, class_id: String) -> Self {
        self.class_id = Some(class_id);
        self
    }

    pub fn with_date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }

    pub fn with_guardian_phone(mut self, phone: String) -> Self {
        self.guardian_phone = Some(phone);
        self
    }

    pub(crate) fn condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(name) = &self.name {
            condition = condition.add(student::Column::Name.contains(name));
        }
        if let Some(roll_number) = &self.roll_number {
            condition = condition.add(student::Column::RollNumber.eq(roll_number.clone()));
        }
        if let Some(class_id) = &self.class_id {
            condition = condition.add(student::Column::ClassId.eq(class_id.clone()));
        }
        if let Some(dob) = self.date_of_birth {
            condition = condition.add(student::Column::DateOfBirth.eq(dob));
        }
        if let Some(phone) = &self.guardian_phone {
            condition = condition.add(Expr::cust_with_values(
                "EXISTS (SELECT 1 FROM json_each(students.guardians) \
                 WHERE json_extract(json_each.value, '$.phoneNumber') = ?)",
                [phone.clone()],
            ));
        }
        condition
    }
}

#[derive(Debug, Clone, Default)]
pub struct VaccineFilter {
    /// Partial match.
    pub name: Option<String>,
    /// Partial match.
    pub manufacturer: Option<String>,
    pub vaccine_type: Option<String>,
    pub batch_id: Option<String>,
}

impl VaccineFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_manufacturer(mut self, manufacturer: String) -> Self {
        self.manufacturer = Some(manufacturer);
        self
    }

    pub fn with_vaccine_type(mut self, vaccine_type: String) -> Self {
        self.vaccine_type = Some(vaccine_type);
        self
    }

    pub fn with_batch_id(mut self, batch_id: String) -> Self {
        self.batch_id = Some(batch_id);
        self
    }

    pub(crate) fn condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(name) = &self.name {
            condition = condition.add(vaccine::Column::Name.contains(name));
        }
        if let Some(manufacturer) = &self.manufacturer {
            condition = condition.add(vaccine::Column::Manufacturer.contains(manufacturer));
        }
        if let Some(vaccine_type) = &self.vaccine_type {
            condition = condition.add(vaccine::Column::VaccineType.eq(vaccine_type.clone()));
        }
        if let Some(batch_id) = &self.batch_id {
            condition = condition.add(Expr::cust_with_values(
                "EXISTS (SELECT 1 FROM json_each(vaccines.batches) \
                 WHERE json_extract(json_each.value, '$.batchId') = ?)",
                [batch_id.clone()],
            ));
        }
        condition
    }
}

/// Drive filter. `status` is evaluated against the clock when the list is read,
/// so it is applied after the rows are fetched rather than in SQL.
#[derive(Debug, Clone, Default)]
pub struct DriveFilter {
    pub status: Option<DriveStatus>,
    pub target_class: Option<String>,
    /// Exact vaccine name; matches drives referencing any vaccine with that name.
    pub vaccine_name: Option<String>,
}

impl DriveFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: DriveStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_target_class(mut self, class_id: String) -> Self {
        self.target_class = Some(class_id);
        self
    }

    pub fn with_vaccine_name(mut self, name: String) -> Self {
        self.vaccine_name = Some(name);
        self
    }

    pub(crate) fn condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(class_id) = &self.target_class {
            condition = condition.add(Expr::cust_with_values(
                "EXISTS (SELECT 1 FROM json_each(vaccination_drives.target_classes) \
                 WHERE json_each.value = ?)",
                [class_id.clone()],
            ));
        }
        if let Some(name) = &self.vaccine_name {
            condition = condition.add(Expr::cust_with_values(
                "EXISTS (SELECT 1 FROM json_each(vaccination_drives.vaccines) \
                 WHERE json_each.value IN (SELECT id FROM vaccines WHERE name = ?))",
                [name.clone()],
            ));
        }
        condition
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub student_id: Option<String>,
    pub vaccine_id: Option<String>,
    pub drive_id: Option<String>,
    /// Inclusive lower bound on the administration date.
    pub from_date: Option<NaiveDate>,
    /// Inclusive upper bound on the administration date.
    pub to_date: Option<NaiveDate>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_student_id(mut self, student_id: String) -> Self {
        self.student_id = Some(student_id);
        self
    }

    pub fn with_vaccine_id(mut self, vaccine_id: String) -> Self {
        self.vaccine_id = Some(vaccine_id);
        self
    }

    pub fn with_drive_id(mut self, drive_id: String) -> Self {
        self.drive_id = Some(drive_id);
        self
    }

    pub fn with_from_date(mut self, from: NaiveDate) -> Self {
        self.from_date = Some(from);
        self
    }

    pub fn with_to_date(mut self, to: NaiveDate) -> Self {
        self.to_date = Some(to);
        self
    }

    pub(crate) fn condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(student_id) = &self.student_id {
            condition = condition.add(vaccination_record::Column::StudentId.eq(student_id.clone()));
        }
        if let Some(vaccine_id) = &self.vaccine_id {
            condition = condition.add(vaccination_record::Column::VaccineId.eq(vaccine_id.clone()));
        }
        if let Some(drive_id) = &self.drive_id {
            condition = condition.add(vaccination_record::Column::DriveId.eq(drive_id.clone()));
        }
        if let Some(from) = self.from_date {
            condition = condition.add(vaccination_record::Column::Date.gte(from));
        }
        if let Some(to) = self.to_date {
            condition = condition.add(vaccination_record::Column::Date.lte(to));
        }
        condition
    }
}
