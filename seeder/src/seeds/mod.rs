pub mod class;
pub mod drive;
pub mod record;
pub mod student;
pub mod user;
pub mod vaccine;
