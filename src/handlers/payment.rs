use crate::external::PhonePeClient;
use crate::models::*;
use actix_web::{web, HttpResponse, ResponseError, Result};

#[utoipa::path(
    post,
    path = "/api/payment/initiate",
    tag = "payment",
    request_body = InitiatePaymentRequest,
    responses(
        (status = 200, description = "Gateway checkout URL to redirect the diner to"),
        (status = 400, description = "Bad amount"),
        (status = 502, description = "Gateway rejected the request")
    )
)]
pub async fn initiate_payment(
    phonepe: web::Data<PhonePeClient>,
    body: web::Json<InitiatePaymentRequest>,
) -> Result<HttpResponse> {
    if let Err(e) = body.validate() {
        return Ok(e.error_response());
    }

    match phonepe.initiate_payment(&body).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/payment/status/{transaction_id}",
    tag = "payment",
    params(("transaction_id" = String, Path, description = "Merchant transaction id")),
    responses(
        (status = 200, description = "Gateway status body, proxied verbatim"),
        (status = 502, description = "Gateway unreachable")
    )
)]
pub async fn payment_status(
    phonepe: web::Data<PhonePeClient>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match phonepe.check_status(&path.into_inner()).await {
        Ok(status) => Ok(HttpResponse::Ok().json(ApiResponse::success(status))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn payment_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/payment")
            .route("/initiate", web::post().to(initiate_payment))
            .route("/status/{transaction_id}", web::get().to(payment_status)),
    );
}
