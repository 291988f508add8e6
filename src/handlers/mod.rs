pub mod admin;
pub mod cart;
pub mod food;
pub mod health;
pub mod offer;
pub mod order;
pub mod payment;
pub mod push;

pub use admin::admin_config;
pub use cart::cart_config;
pub use food::food_config;
pub use health::health_config;
pub use offer::offer_config;
pub use order::order_config;
pub use payment::payment_config;
pub use push::push_config;
