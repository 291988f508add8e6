use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "food_type")]
pub enum FoodType {
    #[sea_orm(string_value = "Veg")]
    Veg,
    #[sea_orm(string_value = "Non-Veg")]
    #[serde(rename = "Non-Veg")]
    NonVeg,
    #[sea_orm(string_value = "Other")]
    Other,
}

impl std::fmt::Display for FoodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FoodType::Veg => write!(f, "Veg"),
            FoodType::NonVeg => write!(f, "Non-Veg"),
            FoodType::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for FoodType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Veg" => Ok(FoodType::Veg),
            "Non-Veg" => Ok(FoodType::NonVeg),
            "Other" => Ok(FoodType::Other),
            _ => Err("Type must be one of: Veg, Non-Veg, Other".to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "foods")]
pub struct Model {
    #[sea_orm(primary_key)]
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_type_round_trip() {
        for s in ["Veg", "Non-Veg", "Other"] {
            assert_eq!(FoodType::from_str(s).unwrap().to_string(), s);
        }
        assert!(FoodType::from_str("Vegan").is_err());
    }
}
