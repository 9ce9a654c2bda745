pub mod m202610010001_create_users;
pub mod m202610010002_create_classes;
pub mod m202610010003_create_students;
pub mod m202610010004_create_vaccines;
pub mod m202610010005_create_vaccination_drives;
pub mod m202610010006_create_vaccination_records;
