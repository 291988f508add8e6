use crate::entities::{cart_item_entity, FoodType};
use crate::error::{AppError, AppResult, FieldError};
use crate::utils::is_valid_email;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartQuery {
    pub user_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub user_email: String,
    pub user_name: Option<String>,
    pub food_id: i64,
    pub food_name: String,
    pub category: Option<String>,
    pub food_type: Option<String>,
    pub quantity: Option<i32>,
    pub price: f64,
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewCartItem {
    pub food_id: i64,
    pub food_name: String,
    pub category: String,
    pub food_type: FoodType,
    pub quantity: i32,
    pub price: f64,
    pub image: Option<String>,
}

impl AddToCartRequest {
    pub fn validate(&self) -> AppResult<NewCartItem> {
        let mut errors = Vec::new();

        if !is_valid_email(&self.user_email) {
            errors.push(FieldError::new("user_email", "Valid email is required"));
        }
        if self.food_name.trim().is_empty() {
            errors.push(FieldError::new("food_name", "Food name is required"));
        }
        let quantity = self.quantity.unwrap_or(1);
        if quantity < 1 {
            errors.push(FieldError::new(
                "quantity",
                "Quantity must be a positive integer",
            ));
        }
        if self.price <= 0.0 {
            errors.push(FieldError::new("price", "Price must be a positive number"));
        }
        let food_type = match self.food_type.as_deref() {
            None | Some("") => FoodType::Veg,
            Some(s) => match s.parse::<FoodType>() {
                Ok(t) => t,
                Err(msg) => {
                    errors.push(FieldError::new("food_type", msg));
                    FoodType::Veg
                }
            },
        };

        if !errors.is_empty() {
            return Err(AppError::validation(errors));
        }

        Ok(NewCartItem {
            food_id: self.food_id,
            food_name: self.food_name.trim().to_string(),
            category: self
                .category
                .clone()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "Uncategorized".to_string()),
            food_type,
            quantity,
            price: self.price,
            image: self.image.clone(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCartItemRequest {
    pub user_email: String,
    pub food_id: i64,
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RemoveFromCartRequest {
    pub user_email: String,
    pub food_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClearCartRequest {
    pub user_email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartItemResponse {
    pub food_id: i64,
    pub food_name: String,
    pub category: String,
    pub food_type: FoodType,
    pub quantity: i32,
    pub price: f64,
    pub image: Option<String>,
}

impl From<cart_item_entity::Model> for CartItemResponse {
    fn from(m: cart_item_entity::Model) -> Self {
        Self {
            food_id: m.food_id,
            food_name: m.food_name,
            category: m.category,
            food_type: m.food_type,
            quantity: m.quantity,
            price: m.price,
            image: m.image,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartResponse {
    pub cart: Vec<CartItemResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_to_cart_defaults() {
        let req = AddToCartRequest {
            user_email: "diner@example.com".to_string(),
            user_name: None,
            food_id: 3,
            food_name: "Lassi".to_string(),
            category: None,
            food_type: None,
            quantity: None,
            price: 60.0,
            image: None,
        };
        let item = req.validate().unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.category, "Uncategorized");
        assert_eq!(item.food_type, FoodType::Veg);
    }

    #[test]
    fn test_add_to_cart_rejects_bad_quantity() {
        let req = AddToCartRequest {
            user_email: "diner@example.com".to_string(),
            user_name: None,
            food_id: 3,
            food_name: "Lassi".to_string(),
            category: None,
            food_type: None,
            quantity: Some(0),
            price: 60.0,
            image: None,
        };
        assert!(matches!(
            req.validate().unwrap_err(),
            AppError::ValidationError(_)
        ));
    }
}
