mod auth_test;
mod classes_test;
mod drives_test;
mod health_test;
mod records_test;
mod users_test;
mod vaccines_test;
