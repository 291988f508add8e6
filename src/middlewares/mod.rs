pub mod auth;
pub mod cors;

pub use auth::{get_claims, AuthMiddleware};
pub use cors::create_cors;
