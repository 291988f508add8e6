pub mod jwt;
pub mod password;
pub mod validation;

pub use jwt::*;
pub use password::*;
pub use validation::{is_valid_email, normalize_email};
