use crate::entities::offer_entity;
use crate::error::{AppError, AppResult, FieldError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOfferRequest {
    #[schema(example = "Weekend Feast")]
    pub title: String,
    #[schema(example = "Flat 20% off on all Non-Veg mains")]
    pub description: String,
    pub image: Option<String>,
    pub active: Option<bool>,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
}

impl CreateOfferRequest {
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(FieldError::new("title", "Title is required"));
        }
        if self.description.trim().is_empty() {
            errors.push(FieldError::new("description", "Description is required"));
        }
        if !errors.is_empty() {
            return Err(AppError::validation(errors));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateOfferRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub active: Option<bool>,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OfferResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub active: bool,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<offer_entity::Model> for OfferResponse {
    fn from(m: offer_entity::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            image: m.image,
            active: m.active,
            valid_from: m.valid_from,
            valid_until: m.valid_until,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
