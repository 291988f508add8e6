pub mod admin;
pub mod cart;
pub mod common;
pub mod food;
pub mod offer;
pub mod order;
pub mod pagination;
pub mod payment;
pub mod push;

pub use admin::*;
pub use cart::*;
pub use common::*;
pub use food::*;
pub use offer::*;
pub use order::*;
pub use pagination::*;
pub use payment::*;
pub use push::*;
