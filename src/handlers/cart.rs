use crate::models::*;
use crate::services::CartService;
use actix_web::{web, HttpResponse, ResponseError, Result};

#[utoipa::path(
    get,
    path = "/api/cart",
    tag = "cart",
    params(("user_email" = String, Query, description = "Cart owner")),
    responses((status = 200, description = "Cart contents, empty if none exists"))
)]
pub async fn get_cart(
    cart_service: web::Data<CartService>,
    query: web::Query<CartQuery>,
) -> Result<HttpResponse> {
    match cart_service.get_cart(&query.user_email).await {
        Ok(cart) => Ok(HttpResponse::Ok().json(ApiResponse::success(cart))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/cart/add",
    tag = "cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Updated cart"),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn add_to_cart(
    cart_service: web::Data<CartService>,
    body: web::Json<AddToCartRequest>,
) -> Result<HttpResponse> {
    let item = match body.validate() {
        Ok(item) => item,
        Err(e) => return Ok(e.error_response()),
    };

    match cart_service
        .add_item(&body.user_email, body.user_name.as_deref(), item)
        .await
    {
        Ok(cart) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_with_message(cart, "Item added to cart"))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/api/cart/update",
    tag = "cart",
    request_body = UpdateCartItemRequest,
    responses(
        (status = 200, description = "Updated cart"),
        (status = 404, description = "Cart or item not found")
    )
)]
pub async fn update_cart_item(
    cart_service: web::Data<CartService>,
    body: web::Json<UpdateCartItemRequest>,
) -> Result<HttpResponse> {
    match cart_service
        .update_item(&body.user_email, body.food_id, body.quantity)
        .await
    {
        Ok(cart) => Ok(HttpResponse::Ok().json(ApiResponse::success(cart))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/cart/remove",
    tag = "cart",
    request_body = RemoveFromCartRequest,
    responses(
        (status = 200, description = "Updated cart"),
        (status = 404, description = "Cart or item not found")
    )
)]
pub async fn remove_from_cart(
    cart_service: web::Data<CartService>,
    body: web::Json<RemoveFromCartRequest>,
) -> Result<HttpResponse> {
    match cart_service
        .remove_item(&body.user_email, body.food_id)
        .await
    {
        Ok(cart) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_with_message(cart, "Item removed from cart"))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/cart/clear",
    tag = "cart",
    request_body = ClearCartRequest,
    responses((status = 200, description = "Cart emptied"))
)]
pub async fn clear_cart(
    cart_service: web::Data<CartService>,
    body: web::Json<ClearCartRequest>,
) -> Result<HttpResponse> {
    match cart_service.clear_cart(&body.user_email).await {
        Ok(cart) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_with_message(cart, "Cart cleared"))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn cart_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/cart")
            .route("", web::get().to(get_cart))
            .route("/add", web::post().to(add_to_cart))
            .route("/update", web::put().to(update_cart_item))
            .route("/remove", web::delete().to(remove_from_cart))
            .route("/clear", web::delete().to(clear_cart)),
    );
}
