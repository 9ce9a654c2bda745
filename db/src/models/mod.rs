pub mod school_class;
pub mod student;
pub mod user;
pub mod vaccination_drive;
pub mod vaccination_record;
pub mod vaccine;

pub use school_class::Entity as SchoolClass;
pub use student::Entity as Student;
pub use user::Entity as User;
pub use vaccination_drive::Entity as VaccinationDrive;
pub use vaccination_record::Entity as VaccinationRecord;
pub use vaccine::Entity as Vaccine;
