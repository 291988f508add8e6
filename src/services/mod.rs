pub mod admin_service;
pub mod cart_service;
pub mod food_service;
pub mod offer_service;
pub mod order_service;
pub mod push_service;

pub use admin_service::AdminService;
pub use cart_service::CartService;
pub use food_service::FoodService;
pub use offer_service::OfferService;
pub use order_service::OrderService;
pub use push_service::PushService;
