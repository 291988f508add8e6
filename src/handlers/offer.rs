use crate::models::*;
use crate::services::OfferService;
use actix_web::{web, HttpResponse, ResponseError, Result};

#[utoipa::path(
    get,
    path = "/api/offers",
    tag = "offer",
    responses((status = 200, description = "Offers currently running"))
)]
pub async fn get_active_offers(offer_service: web::Data<OfferService>) -> Result<HttpResponse> {
    match offer_service.get_active_offers().await {
        Ok(offers) => Ok(HttpResponse::Ok().json(ApiResponse::success(offers))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/offers/all",
    tag = "offer",
    responses((status = 200, description = "Every offer, expired and inactive included"))
)]
pub async fn get_all_offers(offer_service: web::Data<OfferService>) -> Result<HttpResponse> {
    match offer_service.get_all_offers().await {
        Ok(offers) => Ok(HttpResponse::Ok().json(ApiResponse::success(offers))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/offers",
    tag = "offer",
    request_body = CreateOfferRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Offer created"),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_offer(
    offer_service: web::Data<OfferService>,
    body: web::Json<CreateOfferRequest>,
) -> Result<HttpResponse> {
    match offer_service.create_offer(&body).await {
        Ok(offer) => Ok(HttpResponse::Created()
            .json(ApiResponse::success_with_message(offer, "Offer created successfully"))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/api/offers/{id}",
    tag = "offer",
    params(("id" = i64, Path, description = "Offer id")),
    request_body = UpdateOfferRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated offer"),
        (status = 404, description = "No such offer")
    )
)]
pub async fn update_offer(
    offer_service: web::Data<OfferService>,
    path: web::Path<i64>,
    body: web::Json<UpdateOfferRequest>,
) -> Result<HttpResponse> {
    match offer_service.update_offer(path.into_inner(), &body).await {
        Ok(offer) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_with_message(offer, "Offer updated successfully"))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/offers/{id}",
    tag = "offer",
    params(("id" = i64, Path, description = "Offer id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Offer deleted"),
        (status = 404, description = "No such offer")
    )
)]
pub async fn delete_offer(
    offer_service: web::Data<OfferService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match offer_service.delete_offer(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::message_only("Offer deleted successfully"))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn offer_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/offers")
            .route("", web::get().to(get_active_offers))
            .route("", web::post().to(create_offer))
            .route("/all", web::get().to(get_all_offers))
            .route("/{id}", web::put().to(update_offer))
            .route("/{id}", web::delete().to(delete_offer)),
    );
}
