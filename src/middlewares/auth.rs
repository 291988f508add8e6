use crate::error::AppError;
use crate::utils::jwt::{Claims, JwtService};
use actix_web::http::Method;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};

/// Routes that require a valid admin access token. The storefront surface
/// stays public; only management operations appear here.
struct ProtectedRoutes {
    routes: Vec<(Method, &'static str)>,
    prefix_routes: Vec<(Method, &'static str)>,
}

impl ProtectedRoutes {
    fn new() -> Self {
        Self {
            routes: vec![
                (Method::GET, "/api/admin/all"),
                (Method::POST, "/api/admin/add"),
                (Method::DELETE, "/api/admin/remove"),
                (Method::POST, "/api/push/send"),
                (Method::POST, "/api/foods"),
                (Method::POST, "/api/offers"),
            ],
            // Item routes carry an id segment.
            prefix_routes: vec![
                (Method::PUT, "/api/foods/"),
                (Method::DELETE, "/api/foods/"),
                (Method::PUT, "/api/offers/"),
                (Method::DELETE, "/api/offers/"),
            ],
        }
    }

    fn is_protected(&self, method: &Method, path: &str) -> bool {
        if self
            .routes
            .iter()
            .any(|(m, p)| m == method && *p == path)
        {
            return true;
        }
        self.prefix_routes
            .iter()
            .any(|(m, p)| m == method && path.starts_with(p))
    }
}

pub struct AuthMiddleware {
    jwt_service: JwtService,
}

impl AuthMiddleware {
    pub fn new(jwt_service: JwtService) -> Self {
        Self { jwt_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service,
            jwt_service: self.jwt_service.clone(),
            protected: ProtectedRoutes::new(),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
    jwt_service: JwtService,
    protected: ProtectedRoutes,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // CORS preflights pass through untouched.
        if req.method() == Method::OPTIONS {
            return Box::pin(self.service.call(req));
        }

        let token = req
            .headers()
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(str::to_owned);

        // Tokens are attached opportunistically on every route so public
        // handlers can tell an admin caller from a diner.
        let claims = token
            .as_deref()
            .and_then(|t| self.jwt_service.verify_access_token(t).ok());

        if self.protected.is_protected(req.method(), req.path()) {
            match claims {
                Some(claims) => {
                    req.extensions_mut().insert(claims);
                    Box::pin(self.service.call(req))
                }
                None => {
                    let error = if token.is_some() {
                        AppError::AuthError("Invalid access token".to_string())
                    } else {
                        AppError::AuthError("Missing access token".to_string())
                    };
                    Box::pin(async move { Err(error.into()) })
                }
            }
        } else {
            if let Some(claims) = claims {
                req.extensions_mut().insert(claims);
            }
            Box::pin(self.service.call(req))
        }
    }
}

/// Admin claims attached by the middleware, if the caller presented a
/// valid token.
pub fn get_claims(req: &HttpRequest) -> Option<Claims> {
    req.extensions().get::<Claims>().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_routes_are_public() {
        let protected = ProtectedRoutes::new();
        assert!(!protected.is_protected(&Method::GET, "/api/foods"));
        assert!(!protected.is_protected(&Method::GET, "/api/offers"));
        assert!(!protected.is_protected(&Method::POST, "/api/orders"));
        assert!(!protected.is_protected(&Method::POST, "/api/admin/login"));
        assert!(!protected.is_protected(&Method::POST, "/api/push/subscribe"));
    }

    #[test]
    fn test_management_routes_require_auth() {
        let protected = ProtectedRoutes::new();
        assert!(protected.is_protected(&Method::GET, "/api/admin/all"));
        assert!(protected.is_protected(&Method::POST, "/api/admin/add"));
        assert!(protected.is_protected(&Method::DELETE, "/api/admin/remove"));
        assert!(protected.is_protected(&Method::POST, "/api/foods"));
        assert!(protected.is_protected(&Method::PUT, "/api/foods/12"));
        assert!(protected.is_protected(&Method::DELETE, "/api/offers/3"));
        assert!(protected.is_protected(&Method::POST, "/api/push/send"));
    }
}
