use crate::config::Config;
use crate::models::*;
use crate::services::PushService;
use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/api/push/subscribe",
    tag = "push",
    request_body = SubscribeRequest,
    responses(
        (status = 200, description = "Subscription stored"),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn subscribe(
    push_service: web::Data<PushService>,
    body: web::Json<SubscribeRequest>,
) -> Result<HttpResponse> {
    match push_service.subscribe(&body).await {
        Ok(()) => {
            Ok(HttpResponse::Ok().json(ApiResponse::message_only("Subscribed to notifications")))
        }
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/push/unsubscribe",
    tag = "push",
    request_body = UnsubscribeRequest,
    responses((status = 200, description = "Subscriptions removed, count included"))
)]
pub async fn unsubscribe(
    push_service: web::Data<PushService>,
    body: web::Json<UnsubscribeRequest>,
) -> Result<HttpResponse> {
    match push_service.unsubscribe(&body.user_email).await {
        Ok(removed) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Unsubscribed from notifications",
            "data": { "removed": removed }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/push/vapid-key",
    tag = "push",
    responses((status = 200, description = "Public key the browser uses to subscribe"))
)]
pub async fn vapid_key(config: web::Data<Config>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(VapidKeyResponse {
        public_key: config.push.vapid_public_key.clone(),
    })))
}

#[utoipa::path(
    post,
    path = "/api/push/send",
    tag = "push",
    request_body = SendPushRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Delivery attempted, count included"),
        (status = 404, description = "User has no registered devices")
    )
)]
pub async fn send(
    push_service: web::Data<PushService>,
    body: web::Json<SendPushRequest>,
) -> Result<HttpResponse> {
    match push_service.send(&body).await {
        Ok(delivered) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Notification sent",
            "data": { "delivered": delivered }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn push_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/push")
            .route("/subscribe", web::post().to(subscribe))
            .route("/unsubscribe", web::post().to(unsubscribe))
            .route("/vapid-key", web::get().to(vapid_key))
            .route("/send", web::post().to(send)),
    );
}
