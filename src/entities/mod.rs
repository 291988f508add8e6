pub mod admins;
pub mod cart_items;
pub mod carts;
pub mod foods;
pub mod offers;
pub mod orders;
pub mod push_subscriptions;

pub use admins as admin_entity;
pub use cart_items as cart_item_entity;
pub use carts as cart_entity;
pub use foods as food_entity;
pub use offers as offer_entity;
pub use orders as order_entity;
pub use push_subscriptions as push_subscription_entity;

pub use foods::FoodType;
pub use orders::{OrderStatus, PaymentMethod, PaymentStatus};
pub use push_subscriptions::PushPlatform;
