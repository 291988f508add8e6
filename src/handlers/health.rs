use crate::database::DbPool;
use actix_web::{web, HttpResponse, Result};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up"),
        (status = 503, description = "Database unreachable")
    )
)]
pub async fn health(db: web::Data<DbPool>) -> Result<HttpResponse> {
    match db.ping().await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "ok",
            "data": { "database": "up" }
        }))),
        Err(e) => {
            log::error!("Health check failed: {e}");
            Ok(HttpResponse::ServiceUnavailable().json(json!({
                "success": false,
                "message": "Database unreachable",
                "code": "DB_CONNECTION_ERROR"
            })))
        }
    }
}

pub fn health_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
