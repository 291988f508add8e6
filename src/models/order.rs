use crate::entities::{order_entity, FoodType, OrderStatus, PaymentMethod, PaymentStatus};
use crate::error::{AppError, AppResult, FieldError};
use crate::utils::is_valid_email;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MAX_TABLE_NUMBER: i32 = 40;
pub const CHAIRS_PER_TABLE: i32 = 4;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    #[schema(example = "diner@example.com")]
    pub user_email: String,
    pub user_name: Option<String>,
    #[schema(example = "Paneer Tikka")]
    pub food_name: String,
    pub category: Option<String>,
    #[schema(example = "Veg")]
    pub food_type: Option<String>,
    pub quantity: i32,
    pub price: f64,
    pub selected_size: Option<String>,
    pub status: Option<String>,
    pub payment_status: Option<String>,
    pub payment_method: Option<String>,
    pub is_in_restaurant: Option<bool>,
    /// 0 for delivery/takeaway, 1..=40 for dine-in.
    pub table_number: Option<i32>,
    pub chair_indices: Option<Vec<i32>>,
    pub contact_number: Option<String>,
    pub image: Option<String>,
}

/// A create request after validation, with defaults applied and enum
/// strings parsed. This is what the service layer persists.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_email: String,
    pub user_name: String,
    pub food_name: String,
    pub category: String,
    pub food_type: FoodType,
    pub quantity: i32,
    pub price: f64,
    pub total_price: f64,
    pub selected_size: Option<String>,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<PaymentMethod>,
    pub is_in_restaurant: bool,
    pub table_number: i32,
    pub chair_indices: Vec<i32>,
    pub contact_number: Option<String>,
    pub image: Option<String>,
}

impl CreateOrderRequest {
    pub fn validate(&self) -> AppResult<NewOrder> {
        let mut errors = Vec::new();

        if !is_valid_email(&self.user_email) {
            errors.push(FieldError::new("user_email", "Valid email is required"));
        }
        if self.food_name.trim().is_empty() {
            errors.push(FieldError::new("food_name", "Food name is required"));
        }
        if self.quantity < 1 {
            errors.push(FieldError::new(
                "quantity",
                "Quantity must be a positive integer",
            ));
        }
        if self.price <= 0.0 {
            errors.push(FieldError::new("price", "Price must be a positive number"));
        }

        let table_number = self.table_number.unwrap_or(0);
        if !(0..=MAX_TABLE_NUMBER).contains(&table_number) {
            errors.push(FieldError::new(
                "table_number",
                format!("Table number must be between 0 and {MAX_TABLE_NUMBER}"),
            ));
        }

        let chair_indices = self.chair_indices.clone().unwrap_or_default();
        if chair_indices
            .iter()
            .any(|idx| !(0..CHAIRS_PER_TABLE).contains(idx))
        {
            errors.push(FieldError::new(
                "chair_indices",
                "Chair indices must be between 0 and 3",
            ));
        }

        let food_type = match self.food_type.as_deref() {
            None | Some("") => Ok(FoodType::Veg),
            Some(s) => s
                .parse::<FoodType>()
                .map_err(|msg| errors.push(FieldError::new("food_type", msg))),
        }
        .unwrap_or(FoodType::Veg);

        let status = match self.status.as_deref() {
            None | Some("") => Ok(OrderStatus::Order),
            Some(s) => s
                .parse::<OrderStatus>()
                .map_err(|msg| errors.push(FieldError::new("status", msg))),
        }
        .unwrap_or(OrderStatus::Order);

        let payment_status = match self.payment_status.as_deref() {
            None | Some("") => Ok(PaymentStatus::Unpaid),
            Some(s) => s
                .parse::<PaymentStatus>()
                .map_err(|msg| errors.push(FieldError::new("payment_status", msg))),
        }
        .unwrap_or(PaymentStatus::Unpaid);

        let payment_method = match self.payment_method.as_deref() {
            None | Some("") => None,
            Some(s) => match s.parse::<PaymentMethod>() {
                Ok(m) => Some(m),
                Err(msg) => {
                    errors.push(FieldError::new("payment_method", msg));
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(AppError::validation(errors));
        }

        Ok(NewOrder {
            user_email: self.user_email.trim().to_string(),
            user_name: self
                .user_name
                .clone()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "Guest User".to_string()),
            food_name: self.food_name.trim().to_string(),
            category: self
                .category
                .clone()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "Uncategorized".to_string()),
            food_type,
            quantity: self.quantity,
            price: self.price,
            total_price: self.price * f64::from(self.quantity),
            selected_size: self.selected_size.clone(),
            status,
            payment_status,
            payment_method,
            is_in_restaurant: self.is_in_restaurant.unwrap_or(true),
            table_number,
            chair_indices,
            contact_number: self.contact_number.clone(),
            image: self.image.clone(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    #[schema(example = "Preparing")]
    pub status: Option<String>,
    #[schema(example = "Paid")]
    pub payment_status: Option<String>,
    #[schema(example = "UPI")]
    pub payment_method: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OrderUpdate {
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub payment_method: Option<PaymentMethod>,
}

impl UpdateOrderRequest {
    pub fn validate(&self) -> AppResult<OrderUpdate> {
        if self.status.is_none() && self.payment_status.is_none() && self.payment_method.is_none()
        {
            return Err(AppError::BadRequest(
                "Please provide status, payment_status, or payment_method to update".to_string(),
            ));
        }

        let mut errors = Vec::new();

        let status = match self.status.as_deref() {
            None => None,
            Some(s) => match s.parse::<OrderStatus>() {
                Ok(v) => Some(v),
                Err(msg) => {
                    errors.push(FieldError::new("status", msg));
                    None
                }
            },
        };
        let payment_status = match self.payment_status.as_deref() {
            None => None,
            Some(s) => match s.parse::<PaymentStatus>() {
                Ok(v) => Some(v),
                Err(msg) => {
                    errors.push(FieldError::new("payment_status", msg));
                    None
                }
            },
        };
        let payment_method = match self.payment_method.as_deref() {
            None => None,
            Some(s) => match s.parse::<PaymentMethod>() {
                Ok(v) => Some(v),
                Err(msg) => {
                    errors.push(FieldError::new("payment_method", msg));
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(AppError::validation(errors));
        }

        Ok(OrderUpdate {
            status,
            payment_status,
            payment_method,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub user_email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i64,
    pub user_email: String,
    pub user_name: String,
    pub food_name: String,
    pub category: String,
    pub food_type: FoodType,
    pub quantity: i32,
    pub price: f64,
    pub total_price: f64,
    pub selected_size: Option<String>,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<PaymentMethod>,
    pub is_in_restaurant: bool,
    pub table_number: i32,
    pub chair_indices: Vec<i32>,
    pub contact_number: Option<String>,
    pub image: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<order_entity::Model> for OrderResponse {
    fn from(m: order_entity::Model) -> Self {
        let chair_indices =
            serde_json::from_value::<Vec<i32>>(m.chair_indices.clone()).unwrap_or_default();
        Self {
            id: m.id,
            user_email: m.user_email,
            user_name: m.user_name,
            food_name: m.food_name,
            category: m.category,
            food_type: m.food_type,
            quantity: m.quantity,
            price: m.price,
            total_price: m.total_price,
            selected_size: m.selected_size,
            status: m.status,
            payment_status: m.payment_status,
            payment_method: m.payment_method,
            is_in_restaurant: m.is_in_restaurant,
            table_number: m.table_number,
            chair_indices,
            contact_number: m.contact_number,
            image: m.image,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> CreateOrderRequest {
        CreateOrderRequest {
            user_email: "diner@example.com".to_string(),
            user_name: None,
            food_name: "Paneer Tikka".to_string(),
            category: None,
            food_type: None,
            quantity: 2,
            price: 149.5,
            selected_size: None,
            status: None,
            payment_status: None,
            payment_method: None,
            is_in_restaurant: None,
            table_number: Some(7),
            chair_indices: Some(vec![0, 2]),
            contact_number: None,
            image: None,
        }
    }

    fn field_names(err: AppError) -> Vec<String> {
        match err {
            AppError::ValidationError(errors) => {
                errors.into_iter().map(|e| e.field).collect()
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults_applied() {
        let order = base_request().validate().unwrap();
        assert_eq!(order.status, OrderStatus::Order);
        assert_eq!(order.payment_status, PaymentStatus::Unpaid);
        assert_eq!(order.user_name, "Guest User");
        assert_eq!(order.category, "Uncategorized");
        assert_eq!(order.food_type, FoodType::Veg);
        assert!(order.payment_method.is_none());
        assert!(order.is_in_restaurant);
        assert_eq!(order.total_price, 299.0);
    }

    #[test]
    fn test_zero_quantity_rejected_with_field_error() {
        let mut req = base_request();
        req.quantity = 0;
        let fields = field_names(req.validate().unwrap_err());
        assert_eq!(fields, vec!["quantity"]);
    }

    #[test]
    fn test_all_bad_fields_reported_together() {
        let mut req = base_request();
        req.user_email = "not-an-email".to_string();
        req.food_name = "  ".to_string();
        req.quantity = -1;
        req.price = 0.0;
        req.table_number = Some(41);
        let fields = field_names(req.validate().unwrap_err());
        assert_eq!(
            fields,
            vec!["user_email", "food_name", "quantity", "price", "table_number"]
        );
    }

    #[test]
    fn test_invalid_status_rejected() {
        let mut req = base_request();
        req.status = Some("Cooking".to_string());
        let fields = field_names(req.validate().unwrap_err());
        assert_eq!(fields, vec!["status"]);
    }

    #[test]
    fn test_chair_indices_out_of_range_rejected() {
        let mut req = base_request();
        req.chair_indices = Some(vec![0, 4]);
        let fields = field_names(req.validate().unwrap_err());
        assert_eq!(fields, vec!["chair_indices"]);
    }

    #[test]
    fn test_delivery_defaults_to_table_zero() {
        let mut req = base_request();
        req.table_number = None;
        req.chair_indices = None;
        let order = req.validate().unwrap();
        assert_eq!(order.table_number, 0);
        assert!(order.chair_indices.is_empty());
    }

    #[test]
    fn test_update_requires_at_least_one_field() {
        let req = UpdateOrderRequest {
            status: None,
            payment_status: None,
            payment_method: None,
        };
        // Deterministic: same request always gets the same 400.
        assert!(matches!(
            req.validate().unwrap_err(),
            AppError::BadRequest(_)
        ));
        assert!(matches!(
            req.validate().unwrap_err(),
            AppError::BadRequest(_)
        ));
    }

    #[test]
    fn test_update_rejects_unknown_enum_values() {
        let req = UpdateOrderRequest {
            status: Some("Delivered".to_string()),
            payment_status: Some("Pending".to_string()),
            payment_method: Some("Card".to_string()),
        };
        let fields = field_names(req.validate().unwrap_err());
        assert_eq!(fields, vec!["status", "payment_status", "payment_method"]);
    }

    #[test]
    fn test_update_accepts_partial_valid_fields() {
        let req = UpdateOrderRequest {
            status: Some("Served".to_string()),
            payment_status: None,
            payment_method: Some("Cash".to_string()),
        };
        let update = req.validate().unwrap();
        assert_eq!(update.status, Some(OrderStatus::Served));
        assert!(update.payment_status.is_none());
        assert_eq!(update.payment_method, Some(PaymentMethod::Cash));
    }
}
