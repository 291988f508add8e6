use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "order_status")]
pub enum OrderStatus {
    #[sea_orm(string_value = "Order")]
    Order,
    #[sea_orm(string_value = "Preparing")]
    Preparing,
    #[sea_orm(string_value = "Served")]
    Served,
    #[sea_orm(string_value = "Completed")]
    Completed,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Order => write!(f, "Order"),
            OrderStatus::Preparing => write!(f, "Preparing"),
            OrderStatus::Served => write!(f, "Served"),
            OrderStatus::Completed => write!(f, "Completed"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Order" => Ok(OrderStatus::Order),
            "Preparing" => Ok(OrderStatus::Preparing),
            "Served" => Ok(OrderStatus::Served),
            "Completed" => Ok(OrderStatus::Completed),
            _ => Err("Status must be one of: Order, Preparing, Served, Completed".to_string()),
        }
    }
}

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "payment_status")]
pub enum PaymentStatus {
    #[sea_orm(string_value = "Unpaid")]
    Unpaid,
    #[sea_orm(string_value = "Paid")]
    Paid,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Unpaid => write!(f, "Unpaid"),
            PaymentStatus::Paid => write!(f, "Paid"),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Unpaid" => Ok(PaymentStatus::Unpaid),
            "Paid" => Ok(PaymentStatus::Paid),
            _ => Err("Payment status must be one of: Unpaid, Paid".to_string()),
        }
    }
}

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "payment_method")]
pub enum PaymentMethod {
    #[sea_orm(string_value = "UPI")]
    #[serde(rename = "UPI")]
    Upi,
    #[sea_orm(string_value = "Cash")]
    Cash,
    #[sea_orm(string_value = "Other")]
    Other,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Upi => write!(f, "UPI"),
            PaymentMethod::Cash => write!(f, "Cash"),
            PaymentMethod::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UPI" => Ok(PaymentMethod::Upi),
            "Cash" => Ok(PaymentMethod::Cash),
            "Other" => Ok(PaymentMethod::Other),
            _ => Err("Payment method must be one of: UPI, Cash, Other".to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_email: String,
    pub user_name: String,
    pub food_name: String,
    pub category: String,
    pub food_type: super::foods::FoodType,
    pub quantity: i32,
    pub price: f64,
    pub total_price: f64,
    pub selected_size: Option<String>,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<PaymentMethod>,
    pub is_in_restaurant: bool,
    /// 0 means delivery/takeaway, 1..=40 are dine-in tables.
    pub table_number: i32,
    /// Chair indices 0..=3 booked at the table, stored as a JSON array.
    pub chair_indices: Json,
    pub contact_number: Option<String>,
    pub image: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_round_trip() {
        for s in ["Order", "Preparing", "Served", "Completed"] {
            assert_eq!(OrderStatus::from_str(s).unwrap().to_string(), s);
        }
        assert!(OrderStatus::from_str("Cooking").is_err());
        assert!(OrderStatus::from_str("order").is_err());
    }

    #[test]
    fn test_payment_enums_round_trip() {
        assert_eq!(PaymentStatus::from_str("Paid").unwrap().to_string(), "Paid");
        assert!(PaymentStatus::from_str("paid").is_err());
        assert_eq!(PaymentMethod::from_str("UPI").unwrap().to_string(), "UPI");
        assert!(PaymentMethod::from_str("Card").is_err());
    }
}
