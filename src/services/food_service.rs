use crate::database::DbPool;
use crate::entities::food_entity;
use crate::error::{AppError, AppResult};
use crate::models::{FoodResponse, FoodUpdate, NewFood};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

#[derive(Clone)]
pub struct FoodService {
    db: DbPool,
}

impl FoodService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Full menu, unfiltered. The storefront groups by category client-side.
    pub async fn get_foods(&self) -> AppResult<Vec<FoodResponse>> {
        let foods = food_entity::Entity::find()
            .order_by_asc(food_entity::Column::Category)
            .order_by_asc(food_entity::Column::Name)
            .all(&self.db)
            .await?;
        Ok(foods.into_iter().map(Into::into).collect())
    }

    pub async fn get_food(&self, id: i64) -> AppResult<FoodResponse> {
        let food = food_entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Food item not found".to_string()))?;
        Ok(food.into())
    }

    pub async fn create_food(&self, new: NewFood) -> AppResult<FoodResponse> {
        let now = Utc::now();
        let food = food_entity::ActiveModel {
            name: Set(new.name),
            category: Set(new.category),
            food_type: Set(new.food_type),
            price: Set(new.price),
            image: Set(new.image),
            available: Set(new.available),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(food.into())
    }

    pub async fn update_food(&self, id: i64, update: FoodUpdate) -> AppResult<FoodResponse> {
        let food = food_entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Food item not found".to_string()))?;

        let mut active: food_entity::ActiveModel = food.into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(category) = update.category {
            active.category = Set(category);
        }
        if let Some(food_type) = update.food_type {
            active.food_type = Set(food_type);
        }
        if let Some(price) = update.price {
            active.price = Set(price);
        }
        if let Some(image) = update.image {
            active.image = Set(Some(image));
        }
        if let Some(available) = update.available {
            active.available = Set(available);
        }
        active.updated_at = Set(Some(Utc::now()));

        let food = active.update(&self.db).await?;
        Ok(food.into())
    }

    pub async fn delete_food(&self, id: i64) -> AppResult<()> {
        let result = food_entity::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Food item not found".to_string()));
        }
        Ok(())
    }
}
