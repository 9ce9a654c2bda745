
pub use app::{bearer, create_user, get_json_body, make_test_app};
