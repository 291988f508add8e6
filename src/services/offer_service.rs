use crate::database::DbPool;
use crate::entities::offer_entity;
use crate::error::{AppError, AppResult};
use crate::models::{CreateOfferRequest, OfferResponse, UpdateOfferRequest};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone)]
pub struct OfferService {
    db: DbPool,
}

impl OfferService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// What the storefront banner shows: active offers whose validity
    /// window, if set, contains now.
    pub async fn get_active_offers(&self) -> AppResult<Vec<OfferResponse>> {
        let now = Utc::now();
        let offers = offer_entity::Entity::find()
            .filter(offer_entity::Column::Active.eq(true))
            .filter(
                Condition::any()
                    .add(offer_entity::Column::ValidFrom.is_null())
                    .add(offer_entity::Column::ValidFrom.lte(now)),
            )
            .filter(
                Condition::any()
                    .add(offer_entity::Column::ValidUntil.is_null())
                    .add(offer_entity::Column::ValidUntil.gte(now)),
            )
            .order_by_desc(offer_entity::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(offers.into_iter().map(Into::into).collect())
    }

    /// Everything, expired and inactive included, for the admin dashboard.
    pub async fn get_all_offers(&self) -> AppResult<Vec<OfferResponse>> {
        let offers = offer_entity::Entity::find()
            .order_by_desc(offer_entity::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(offers.into_iter().map(Into::into).collect())
    }

    pub async fn create_offer(&self, req: &CreateOfferRequest) -> AppResult<OfferResponse> {
        req.validate()?;

        let now = Utc::now();
        let offer = offer_entity::ActiveModel {
            title: Set(req.title.trim().to_string()),
            description: Set(req.description.trim().to_string()),
            image: Set(req.image.clone()),
            active: Set(req.active.unwrap_or(true)),
            valid_from: Set(req.valid_from),
            valid_until: Set(req.valid_until),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(offer.into())
    }

    pub async fn update_offer(&self, id: i64, req: &UpdateOfferRequest) -> AppResult<OfferResponse> {
        let offer = offer_entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Offer not found".to_string()))?;

        let mut active: offer_entity::ActiveModel = offer.into();
        if let Some(title) = &req.title {
            active.title = Set(title.trim().to_string());
        }
        if let Some(description) = &req.description {
            active.description = Set(description.trim().to_string());
        }
        if let Some(image) = &req.image {
            active.image = Set(Some(image.clone()));
        }
        if let Some(is_active) = req.active {
            active.active = Set(is_active);
        }
        if req.valid_from.is_some() {
            active.valid_from = Set(req.valid_from);
        }
        if req.valid_until.is_some() {
            active.valid_until = Set(req.valid_until);
        }
        active.updated_at = Set(Some(Utc::now()));

        let offer = active.update(&self.db).await?;
        Ok(offer.into())
    }

    pub async fn delete_offer(&self, id: i64) -> AppResult<()> {
        let result = offer_entity::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Offer not found".to_string()));
        }
        Ok(())
    }
}
