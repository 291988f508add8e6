use crate::database::DbPool;
use crate::entities::{order_entity, OrderStatus, PaymentStatus};
use crate::error::{AppError, AppResult};
use crate::models::{
    NewOrder, OrderQuery, OrderResponse, OrderUpdate, PaginatedResponse, PaginationParams,
};
use crate::services::PushService;
use crate::utils::jwt::Claims;
use crate::utils::normalize_email;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use std::collections::BTreeMap;

/// What the diner's device shows when the kitchen moves an order along.
fn status_message(status: &OrderStatus) -> &'static str {
    match status {
        OrderStatus::Order => "Your order has been received",
        OrderStatus::Preparing => "Your order is being prepared",
        OrderStatus::Served => "Your order has been served. Enjoy!",
        OrderStatus::Completed => "Your order is completed. Thank you for dining with us!",
    }
}

/// Merges chair bookings across all live dine-in orders, one entry per
/// table, chairs deduplicated and sorted.
fn merge_occupied_tables(orders: &[order_entity::Model]) -> BTreeMap<i32, Vec<i32>> {
    let mut tables: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
    for order in orders {
        let chairs: Vec<i32> =
            serde_json::from_value(order.chair_indices.clone()).unwrap_or_default();
        tables.entry(order.table_number).or_default().extend(chairs);
    }
    for chairs in tables.values_mut() {
        chairs.sort_unstable();
        chairs.dedup();
    }
    tables
}

#[derive(Clone)]
pub struct OrderService {
    db: DbPool,
    push: PushService,
}

impl OrderService {
    pub fn new(db: DbPool, push: PushService) -> Self {
        Self { db, push }
    }

    fn active_model(new: NewOrder) -> order_entity::ActiveModel {
        let now = Utc::now();
        order_entity::ActiveModel {
            user_email: Set(normalize_email(&new.user_email)),
            user_name: Set(new.user_name),
            food_name: Set(new.food_name),
            category: Set(new.category),
            food_type: Set(new.food_type),
            quantity: Set(new.quantity),
            price: Set(new.price),
            total_price: Set(new.total_price),
            selected_size: Set(new.selected_size),
            status: Set(new.status),
            payment_status: Set(new.payment_status),
            payment_method: Set(new.payment_method),
            is_in_restaurant: Set(new.is_in_restaurant),
            table_number: Set(new.table_number),
            chair_indices: Set(serde_json::json!(new.chair_indices)),
            contact_number: Set(new.contact_number),
            image: Set(new.image),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
    }

    pub async fn create_order(&self, new: NewOrder) -> AppResult<OrderResponse> {
        let order = Self::active_model(new).insert(&self.db).await?;

        self.notify_placed(std::slice::from_ref(&order));
        Ok(order.into())
    }

    /// Checkout of a whole cart. All rows land or none do.
    pub async fn create_orders(&self, items: Vec<NewOrder>) -> AppResult<Vec<OrderResponse>> {
        let txn = self.db.begin().await?;
        let mut orders = Vec::with_capacity(items.len());
        for item in items {
            orders.push(Self::active_model(item).insert(&txn).await?);
        }
        txn.commit().await?;

        self.notify_placed(&orders);
        Ok(orders.into_iter().map(Into::into).collect())
    }

    pub async fn get_orders(
        &self,
        query: &OrderQuery,
    ) -> AppResult<PaginatedResponse<OrderResponse>> {
        let params = PaginationParams::new(query.page, query.per_page);

        let mut finder = order_entity::Entity::find();
        if let Some(email) = query
            .user_email
            .as_deref()
            .filter(|s| !s.trim().is_empty())
        {
            finder = finder.filter(order_entity::Column::UserEmail.eq(normalize_email(email)));
        }

        let paginator = finder
            .order_by_desc(order_entity::Column::CreatedAt)
            .paginate(&self.db, params.get_per_page());

        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(params.get_page() - 1).await?;

        let items: Vec<OrderResponse> = orders.into_iter().map(Into::into).collect();
        Ok(PaginatedResponse::new(items, &params, total))
    }

    pub async fn get_order(&self, id: i64) -> AppResult<OrderResponse> {
        let order = order_entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;
        Ok(order.into())
    }

    pub async fn update_order(&self, id: i64, update: OrderUpdate) -> AppResult<OrderResponse> {
        let order = order_entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

        let old_status = order.status.clone();
        let old_payment_status = order.payment_status.clone();

        let mut active: order_entity::ActiveModel = order.into();
        if let Some(status) = &update.status {
            active.status = Set(status.clone());
        }
        if let Some(payment_status) = &update.payment_status {
            active.payment_status = Set(payment_status.clone());
        }
        if let Some(payment_method) = &update.payment_method {
            active.payment_method = Set(Some(payment_method.clone()));
        }
        active.updated_at = Set(Some(Utc::now()));
        let order = active.update(&self.db).await?;

        if let Some(status) = update.status.filter(|s| *s != old_status) {
            let payload = self
                .push
                .payload("Order Update", status_message(&status))
                .with_tag(format!("order-{}", order.id))
                .with_data(serde_json::json!({
                    "orderId": order.id,
                    "type": "status_change",
                    "status": status,
                }));
            self.spawn_user_notification(order.user_email.clone(), payload);
        }

        if update
            .payment_status
            .filter(|p| *p == PaymentStatus::Paid && old_payment_status != PaymentStatus::Paid)
            .is_some()
        {
            let payload = self
                .push
                .payload(
                    "Payment Received",
                    format!("Payment confirmed for {}", order.food_name),
                )
                .with_tag(format!("payment-{}", order.id))
                .with_data(serde_json::json!({
                    "orderId": order.id,
                    "type": "payment",
                }));
            self.spawn_user_notification(order.user_email.clone(), payload.clone());

            let admin_payload = payload
                .with_tag(format!("admin-payment-{}", order.id));
            let push = self.push.clone();
            tokio::spawn(async move {
                if let Err(e) = push.send_to_admins(&admin_payload).await {
                    log::warn!("Admin push notification failed: {e}");
                }
            });
        }

        Ok(order.into())
    }

    /// Admins can delete any order; diners may only clear completed ones
    /// from their history.
    pub async fn delete_order(&self, id: i64, claims: Option<&Claims>) -> AppResult<()> {
        let order = order_entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

        if claims.is_none() && order.status != OrderStatus::Completed {
            return Err(AppError::Forbidden(
                "Only completed orders can be deleted".to_string(),
            ));
        }

        order_entity::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    /// Seat map for the table picker: every chair booked by an order that
    /// has not yet completed.
    pub async fn get_occupied_tables(&self) -> AppResult<BTreeMap<i32, Vec<i32>>> {
        let orders = order_entity::Entity::find()
            .filter(order_entity::Column::Status.ne(OrderStatus::Completed))
            .filter(order_entity::Column::IsInRestaurant.eq(true))
            .filter(order_entity::Column::TableNumber.gt(0))
            .all(&self.db)
            .await?;

        Ok(merge_occupied_tables(&orders))
    }

    fn notify_placed(&self, orders: &[order_entity::Model]) {
        let Some(first) = orders.first() else {
            return;
        };

        let summary = if orders.len() == 1 {
            format!("{} x{}", first.food_name, first.quantity)
        } else {
            format!("{} items", orders.len())
        };

        let user_payload = self
            .push
            .payload("Order Placed", format!("{summary} has been received"))
            .with_tag(format!("order-{}", first.id))
            .with_data(serde_json::json!({
                "orderId": first.id,
                "type": "new_order",
            }));
        self.spawn_user_notification(first.user_email.clone(), user_payload);

        let location = if first.is_in_restaurant && first.table_number > 0 {
            format!("Table {}", first.table_number)
        } else {
            "Delivery".to_string()
        };
        let admin_payload = self
            .push
            .payload("New Order", format!("{summary} ({location})"))
            .with_tag(format!("admin-order-{}", first.id))
            .with_data(serde_json::json!({
                "orderId": first.id,
                "type": "new_order",
            }));

        let push = self.push.clone();
        tokio::spawn(async move {
            if let Err(e) = push.send_to_admins(&admin_payload).await {
                log::warn!("Admin push notification failed: {e}");
            }
        });
    }

    fn spawn_user_notification(&self, user_email: String, payload: crate::models::NotificationPayload) {
        let push = self.push.clone();
        tokio::spawn(async move {
            if let Err(e) = push.send_to_user(&user_email, &payload).await {
                log::warn!("Push notification to {user_email} failed: {e}");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{FoodType, PaymentStatus};

    fn dine_in_order(id: i64, table: i32, chairs: Vec<i32>, status: OrderStatus) -> order_entity::Model {
        order_entity::Model {
            id,
            user_email: "diner@example.com".to_string(),
            user_name: "Guest User".to_string(),
            food_name: "Paneer Tikka".to_string(),
            category: "Starters".to_string(),
            food_type: FoodType::Veg,
            quantity: 1,
            price: 149.0,
            total_price: 149.0,
            selected_size: None,
            status,
            payment_status: PaymentStatus::Unpaid,
            payment_method: None,
            is_in_restaurant: true,
            table_number: table,
            chair_indices: serde_json::json!(chairs),
            contact_number: None,
            image: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_occupied_tables_merged_and_sorted() {
        let orders = vec![
            dine_in_order(1, 5, vec![2, 0], OrderStatus::Order),
            dine_in_order(2, 5, vec![2, 3], OrderStatus::Preparing),
            dine_in_order(3, 9, vec![1], OrderStatus::Served),
        ];
        let tables = merge_occupied_tables(&orders);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[&5], vec![0, 2, 3]);
        assert_eq!(tables[&9], vec![1]);
    }

    #[test]
    fn test_occupied_tables_ignores_bad_chair_json() {
        let mut order = dine_in_order(1, 3, vec![], OrderStatus::Order);
        order.chair_indices = serde_json::json!("not-an-array");
        let tables = merge_occupied_tables(&[order]);
        assert_eq!(tables[&3], Vec::<i32>::new());
    }

    #[test]
    fn test_status_messages_cover_every_state() {
        assert!(status_message(&OrderStatus::Order).contains("received"));
        assert!(status_message(&OrderStatus::Preparing).contains("prepared"));
        assert!(status_message(&OrderStatus::Served).contains("served"));
        assert!(status_message(&OrderStatus::Completed).contains("completed"));
    }
}
