use crate::models::*;
use crate::services::FoodService;
use actix_web::{web, HttpResponse, ResponseError, Result};

#[utoipa::path(
    get,
    path = "/api/foods",
    tag = "food",
    responses((status = 200, description = "Full menu"))
)]
pub async fn get_foods(food_service: web::Data<FoodService>) -> Result<HttpResponse> {
    match food_service.get_foods().await {
        Ok(foods) => Ok(HttpResponse::Ok().json(ApiResponse::success(foods))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/foods/{id}",
    tag = "food",
    params(("id" = i64, Path, description = "Food id")),
    responses(
        (status = 200, description = "The food item"),
        (status = 404, description = "No such food item")
    )
)]
pub async fn get_food(
    food_service: web::Data<FoodService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match food_service.get_food(path.into_inner()).await {
        Ok(food) => Ok(HttpResponse::Ok().json(ApiResponse::success(food))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/foods",
    tag = "food",
    request_body = CreateFoodRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Food item created"),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Admin token required")
    )
)]
pub async fn create_food(
    food_service: web::Data<FoodService>,
    body: web::Json<CreateFoodRequest>,
) -> Result<HttpResponse> {
    let new_food = match body.validate() {
        Ok(food) => food,
        Err(e) => return Ok(e.error_response()),
    };

    match food_service.create_food(new_food).await {
        Ok(food) => Ok(HttpResponse::Created()
            .json(ApiResponse::success_with_message(food, "Food item created successfully"))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/api/foods/{id}",
    tag = "food",
    params(("id" = i64, Path, description = "Food id")),
    request_body = UpdateFoodRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated food item"),
        (status = 404, description = "No such food item")
    )
)]
pub async fn update_food(
    food_service: web::Data<FoodService>,
    path: web::Path<i64>,
    body: web::Json<UpdateFoodRequest>,
) -> Result<HttpResponse> {
    let update = match body.validate() {
        Ok(update) => update,
        Err(e) => return Ok(e.error_response()),
    };

    match food_service.update_food(path.into_inner(), update).await {
        Ok(food) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_with_message(food, "Food item updated successfully"))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/foods/{id}",
    tag = "food",
    params(("id" = i64, Path, description = "Food id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Food item deleted"),
        (status = 404, description = "No such food item")
    )
)]
pub async fn delete_food(
    food_service: web::Data<FoodService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match food_service.delete_food(path.into_inner()).await {
        Ok(()) => {
            Ok(HttpResponse::Ok().json(ApiResponse::message_only("Food item deleted successfully")))
        }
        Err(e) => Ok(e.error_response()),
    }
}

pub fn food_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/foods")
            .route("", web::get().to(get_foods))
            .route("", web::post().to(create_food))
            .route("/{id}", web::get().to(get_food))
            .route("/{id}", web::put().to(update_food))
            .route("/{id}", web::delete().to(delete_food)),
    );
}
