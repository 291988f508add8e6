use crate::error::{AppError, FieldError};
use crate::middlewares::get_claims;
use crate::models::*;
use crate::services::OrderService;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError, Result};

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "order",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order placed"),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_order(
    order_service: web::Data<OrderService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse> {
    let new_order = match body.validate() {
        Ok(order) => order,
        Err(e) => return Ok(e.error_response()),
    };

    match order_service.create_order(new_order).await {
        Ok(order) => Ok(HttpResponse::Created()
            .json(ApiResponse::success_with_message(order, "Order placed successfully"))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/orders/bulk",
    tag = "order",
    request_body = Vec<CreateOrderRequest>,
    responses(
        (status = 201, description = "Orders placed"),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_orders(
    order_service: web::Data<OrderService>,
    body: web::Json<Vec<CreateOrderRequest>>,
) -> Result<HttpResponse> {
    if body.is_empty() {
        return Ok(
            AppError::BadRequest("At least one order item is required".to_string())
                .error_response(),
        );
    }

    // Validate every item before touching the database; field names are
    // prefixed with the item index so the client can point at the bad row.
    let mut errors = Vec::new();
    let mut items = Vec::with_capacity(body.len());
    for (index, item) in body.iter().enumerate() {
        match item.validate() {
            Ok(order) => items.push(order),
            Err(AppError::ValidationError(item_errors)) => {
                errors.extend(item_errors.into_iter().map(|e| FieldError {
                    field: format!("items[{index}].{}", e.field),
                    message: e.message,
                }));
            }
            Err(e) => return Ok(e.error_response()),
        }
    }
    if !errors.is_empty() {
        return Ok(AppError::validation(errors).error_response());
    }

    match order_service.create_orders(items).await {
        Ok(orders) => Ok(HttpResponse::Created()
            .json(ApiResponse::success_with_message(orders, "Orders placed successfully"))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "order",
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-based"),
        ("per_page" = Option<u64>, Query, description = "Items per page, max 100"),
        ("user_email" = Option<String>, Query, description = "Filter to one diner's orders")
    ),
    responses(
        (status = 200, description = "Paginated orders, newest first")
    )
)]
pub async fn get_orders(
    order_service: web::Data<OrderService>,
    query: web::Query<OrderQuery>,
) -> Result<HttpResponse> {
    match order_service.get_orders(&query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/orders/occupied-tables",
    tag = "order",
    responses(
        (status = 200, description = "Chairs booked per table across live dine-in orders")
    )
)]
pub async fn get_occupied_tables(order_service: web::Data<OrderService>) -> Result<HttpResponse> {
    match order_service.get_occupied_tables().await {
        Ok(tables) => Ok(HttpResponse::Ok().json(ApiResponse::success(tables))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "order",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "The order"),
        (status = 404, description = "No such order")
    )
)]
pub async fn get_order(
    order_service: web::Data<OrderService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match order_service.get_order(path.into_inner()).await {
        Ok(order) => Ok(HttpResponse::Ok().json(ApiResponse::success(order))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = "order",
    params(("id" = i64, Path, description = "Order id")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Updated order"),
        (status = 400, description = "No updatable field or bad enum value"),
        (status = 404, description = "No such order")
    )
)]
pub async fn update_order(
    order_service: web::Data<OrderService>,
    path: web::Path<i64>,
    body: web::Json<UpdateOrderRequest>,
) -> Result<HttpResponse> {
    let update = match body.validate() {
        Ok(update) => update,
        Err(e) => return Ok(e.error_response()),
    };

    match order_service.update_order(path.into_inner(), update).await {
        Ok(order) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_with_message(order, "Order updated successfully"))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "order",
    params(("id" = i64, Path, description = "Order id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Order deleted"),
        (status = 403, description = "Diners may only delete completed orders"),
        (status = 404, description = "No such order")
    )
)]
pub async fn delete_order(
    order_service: web::Data<OrderService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let claims = get_claims(&req);
    match order_service
        .delete_order(path.into_inner(), claims.as_ref())
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::message_only("Order deleted successfully"))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn order_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/orders")
            .route("", web::post().to(create_order))
            .route("", web::get().to(get_orders))
            .route("/bulk", web::post().to(create_orders))
            .route("/occupied-tables", web::get().to(get_occupied_tables))
            .route("/{id}", web::get().to(get_order))
            .route("/{id}", web::put().to(update_order))
            .route("/{id}", web::delete().to(delete_order)),
    );
}
