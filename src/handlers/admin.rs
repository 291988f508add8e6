use crate::error::AppError;
use crate::middlewares::get_claims;
use crate::models::*;
use crate::services::AdminService;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError, Result};

#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "admin",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Token pair and admin profile"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    admin_service: web::Data<AdminService>,
    body: web::Json<AdminLoginRequest>,
) -> Result<HttpResponse> {
    match admin_service.login(&body).await {
        Ok(auth) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_with_message(auth, "Login successful"))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/refresh",
    tag = "admin",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Fresh token pair"),
        (status = 401, description = "Invalid or expired refresh token")
    )
)]
pub async fn refresh(
    admin_service: web::Data<AdminService>,
    body: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse> {
    match admin_service.refresh(&body.refresh_token).await {
        Ok(auth) => Ok(HttpResponse::Ok().json(ApiResponse::success(auth))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/check",
    tag = "admin",
    params(("email" = String, Query, description = "Email to probe")),
    responses((status = 200, description = "Whether the email belongs to an admin"))
)]
pub async fn check(
    admin_service: web::Data<AdminService>,
    query: web::Query<AdminCheckQuery>,
) -> Result<HttpResponse> {
    match admin_service.check_status(&query.email).await {
        Ok(status) => Ok(HttpResponse::Ok().json(ApiResponse::success(status))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/all",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All admin accounts"),
        (status = 403, description = "Super admin only")
    )
)]
pub async fn list_admins(
    admin_service: web::Data<AdminService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let Some(claims) = get_claims(&req) else {
        return Ok(AppError::AuthError("Missing access token".to_string()).error_response());
    };

    match admin_service.list_admins(&claims).await {
        Ok(admins) => Ok(HttpResponse::Ok().json(ApiResponse::success(admins))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/add",
    tag = "admin",
    request_body = AddAdminRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Admin created"),
        (status = 403, description = "Super admin only"),
        (status = 409, description = "Email is already an admin")
    )
)]
pub async fn add_admin(
    admin_service: web::Data<AdminService>,
    req: HttpRequest,
    body: web::Json<AddAdminRequest>,
) -> Result<HttpResponse> {
    let Some(claims) = get_claims(&req) else {
        return Ok(AppError::AuthError("Missing access token".to_string()).error_response());
    };

    match admin_service.add_admin(&claims, &body).await {
        Ok(admin) => Ok(HttpResponse::Created()
            .json(ApiResponse::success_with_message(admin, "Admin added successfully"))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/remove",
    tag = "admin",
    request_body = RemoveAdminRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Admin removed"),
        (status = 403, description = "Super admin only, cannot remove self or super admin"),
        (status = 404, description = "No such admin")
    )
)]
pub async fn remove_admin(
    admin_service: web::Data<AdminService>,
    req: HttpRequest,
    body: web::Json<RemoveAdminRequest>,
) -> Result<HttpResponse> {
    let Some(claims) = get_claims(&req) else {
        return Ok(AppError::AuthError("Missing access token".to_string()).error_response());
    };

    match admin_service.remove_admin(&claims, &body).await {
        Ok(()) => {
            Ok(HttpResponse::Ok().json(ApiResponse::message_only("Admin removed successfully")))
        }
        Err(e) => Ok(e.error_response()),
    }
}

pub fn admin_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/login", web::post().to(login))
            .route("/refresh", web::post().to(refresh))
            .route("/check", web::get().to(check))
            .route("/all", web::get().to(list_admins))
            .route("/add", web::post().to(add_admin))
            .route("/remove", web::delete().to(remove_admin)),
    );
}
