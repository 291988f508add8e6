use crate::entities::{food_entity, FoodType};
use crate::error::{AppError, AppResult, FieldError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFoodRequest {
    #[schema(example = "Masala Dosa")]
    pub name: String,
    #[schema(example = "South Indian")]
    pub category: String,
    #[schema(example = "Veg")]
    pub food_type: String,
    pub price: f64,
    pub image: Option<String>,
    pub available: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct NewFood {
    pub name: String,
    pub category: String,
    pub food_type: FoodType,
    pub price: f64,
    pub image: Option<String>,
    pub available: bool,
}

impl CreateFoodRequest {
    pub fn validate(&self) -> AppResult<NewFood> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        }
        if self.category.trim().is_empty() {
            errors.push(FieldError::new("category", "Category is required"));
        }
        if self.price <= 0.0 {
            errors.push(FieldError::new("price", "Price must be a positive number"));
        }

        let food_type = match self.food_type.parse::<FoodType>() {
            Ok(t) => t,
            Err(msg) => {
                errors.push(FieldError::new("food_type", msg));
                FoodType::Other
            }
        };

        if !errors.is_empty() {
            return Err(AppError::validation(errors));
        }

        Ok(NewFood {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            food_type,
            price: self.price,
            image: self.image.clone(),
            available: self.available.unwrap_or(true),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateFoodRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub food_type: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub available: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct FoodUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub food_type: Option<FoodType>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub available: Option<bool>,
}

impl UpdateFoodRequest {
    pub fn validate(&self) -> AppResult<FoodUpdate> {
        let mut errors = Vec::new();

        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                errors.push(FieldError::new("name", "Name cannot be empty"));
            }
        }
        if let Some(price) = self.price {
            if price <= 0.0 {
                errors.push(FieldError::new("price", "Price must be a positive number"));
            }
        }
        let food_type = match self.food_type.as_deref() {
            None => None,
            Some(s) => match s.parse::<FoodType>() {
                Ok(t) => Some(t),
                Err(msg) => {
                    errors.push(FieldError::new("food_type", msg));
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(AppError::validation(errors));
        }

        Ok(FoodUpdate {
            name: self.name.as_ref().map(|s| s.trim().to_string()),
            category: self.category.as_ref().map(|s| s.trim().to_string()),
            food_type,
            price: self.price,
            image: self.image.clone(),
            available: self.available,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FoodResponse {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub food_type: FoodType,
    pub price: f64,
    pub image: Option<String>,
    pub available: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<food_entity::Model> for FoodResponse {
    fn from(m: food_entity::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            category: m.category,
            food_type: m.food_type,
            price: m.price,
            image: m.image,
            available: m.available,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_food_validation() {
        let req = CreateFoodRequest {
            name: " Masala Dosa ".to_string(),
            category: "South Indian".to_string(),
            food_type: "Veg".to_string(),
            price: 120.0,
            image: None,
            available: None,
        };
        let food = req.validate().unwrap();
        assert_eq!(food.name, "Masala Dosa");
        assert!(food.available);
    }

    #[test]
    fn test_create_food_bad_type_and_price() {
        let req = CreateFoodRequest {
            name: "X".to_string(),
            category: "Y".to_string(),
            food_type: "Vegan".to_string(),
            price: -1.0,
            image: None,
            available: None,
        };
        match req.validate().unwrap_err() {
            AppError::ValidationError(errors) => {
                let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["price", "food_type"]);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
