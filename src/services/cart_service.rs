use crate::database::DbPool;
use crate::entities::{cart_entity, cart_item_entity};
use crate::error::{AppError, AppResult, FieldError};
use crate::models::{CartResponse, NewCartItem};
use crate::utils::{is_valid_email, normalize_email};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, Set};

/// One cart per email, created lazily on first add. Every mutation returns
/// the cart's fresh contents so the client never has to refetch.
#[derive(Clone)]
pub struct CartService {
    db: DbPool,
}

impl CartService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    fn require_email(user_email: &str) -> AppResult<String> {
        if !is_valid_email(user_email) {
            return Err(AppError::validation(vec![FieldError::new(
                "user_email",
                "Valid email is required",
            )]));
        }
        Ok(normalize_email(user_email))
    }

    async fn find_cart(&self, email: &str) -> AppResult<Option<cart_entity::Model>> {
        Ok(cart_entity::Entity::find()
            .filter(cart_entity::Column::UserEmail.eq(email))
            .one(&self.db)
            .await?)
    }

    async fn cart_contents(&self, cart: &cart_entity::Model) -> AppResult<CartResponse> {
        let items = cart
            .find_related(cart_item_entity::Entity)
            .all(&self.db)
            .await?;
        Ok(CartResponse {
            cart: items.into_iter().map(Into::into).collect(),
        })
    }

    /// A missing cart is just an empty one.
    pub async fn get_cart(&self, user_email: &str) -> AppResult<CartResponse> {
        let email = Self::require_email(user_email)?;
        match self.find_cart(&email).await? {
            Some(cart) => self.cart_contents(&cart).await,
            None => Ok(CartResponse { cart: Vec::new() }),
        }
    }

    pub async fn add_item(
        &self,
        user_email: &str,
        user_name: Option<&str>,
        item: NewCartItem,
    ) -> AppResult<CartResponse> {
        let email = Self::require_email(user_email)?;
        let now = Utc::now();

        let cart = match self.find_cart(&email).await? {
            Some(cart) => cart,
            None => {
                cart_entity::ActiveModel {
                    user_email: Set(email.clone()),
                    user_name: Set(user_name
                        .filter(|s| !s.trim().is_empty())
                        .unwrap_or("Guest User")
                        .to_string()),
                    created_at: Set(Some(now)),
                    updated_at: Set(Some(now)),
                    ..Default::default()
                }
                .insert(&self.db)
                .await?
            }
        };

        // Re-adding the same dish bumps the quantity instead of duplicating
        // the line.
        let existing = cart_item_entity::Entity::find()
            .filter(cart_item_entity::Column::CartId.eq(cart.id))
            .filter(cart_item_entity::Column::FoodId.eq(item.food_id))
            .one(&self.db)
            .await?;

        match existing {
            Some(line) => {
                let quantity = line.quantity + item.quantity;
                let mut active: cart_item_entity::ActiveModel = line.into();
                active.quantity = Set(quantity);
                active.update(&self.db).await?;
            }
            None => {
                cart_item_entity::ActiveModel {
                    cart_id: Set(cart.id),
                    food_id: Set(item.food_id),
                    food_name: Set(item.food_name),
                    category: Set(item.category),
                    food_type: Set(item.food_type),
                    quantity: Set(item.quantity),
                    price: Set(item.price),
                    image: Set(item.image),
                    ..Default::default()
                }
                .insert(&self.db)
                .await?;
            }
        }

        self.touch(&cart).await?;
        self.cart_contents(&cart).await
    }

    /// Setting quantity below one removes the line.
    pub async fn update_item(
        &self,
        user_email: &str,
        food_id: i64,
        quantity: i32,
    ) -> AppResult<CartResponse> {
        let email = Self::require_email(user_email)?;
        let cart = self
            .find_cart(&email)
            .await?
            .ok_or_else(|| AppError::NotFound("Cart not found".to_string()))?;

        let line = cart_item_entity::Entity::find()
            .filter(cart_item_entity::Column::CartId.eq(cart.id))
            .filter(cart_item_entity::Column::FoodId.eq(food_id))
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found in cart".to_string()))?;

        if quantity < 1 {
            let line_id = line.id;
            cart_item_entity::Entity::delete_by_id(line_id)
                .exec(&self.db)
                .await?;
        } else {
            let mut active: cart_item_entity::ActiveModel = line.into();
            active.quantity = Set(quantity);
            active.update(&self.db).await?;
        }

        self.touch(&cart).await?;
        self.cart_contents(&cart).await
    }

    pub async fn remove_item(&self, user_email: &str, food_id: i64) -> AppResult<CartResponse> {
        let email = Self::require_email(user_email)?;
        let cart = self
            .find_cart(&email)
            .await?
            .ok_or_else(|| AppError::NotFound("Cart not found".to_string()))?;

        let result = cart_item_entity::Entity::delete_many()
            .filter(cart_item_entity::Column::CartId.eq(cart.id))
            .filter(cart_item_entity::Column::FoodId.eq(food_id))
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Item not found in cart".to_string()));
        }

        self.touch(&cart).await?;
        self.cart_contents(&cart).await
    }

    /// Empties the cart but keeps the cart row; checkout calls this.
    pub async fn clear_cart(&self, user_email: &str) -> AppResult<CartResponse> {
        let email = Self::require_email(user_email)?;
        let Some(cart) = self.find_cart(&email).await? else {
            return Ok(CartResponse { cart: Vec::new() });
        };

        cart_item_entity::Entity::delete_many()
            .filter(cart_item_entity::Column::CartId.eq(cart.id))
            .exec(&self.db)
            .await?;

        self.touch(&cart).await?;
        Ok(CartResponse { cart: Vec::new() })
    }

    async fn touch(&self, cart: &cart_entity::Model) -> AppResult<()> {
        let mut active: cart_entity::ActiveModel = cart.clone().into();
        active.updated_at = Set(Some(Utc::now()));
        active.update(&self.db).await?;
        Ok(())
    }
}
