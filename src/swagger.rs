use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::{FoodType, OrderStatus, PaymentMethod, PaymentStatus, PushPlatform};
use crate::error::FieldError;
use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::order::create_order,
        handlers::order::create_orders,
        handlers::order::get_orders,
        handlers::order::get_occupied_tables,
        handlers::order::get_order,
        handlers::order::update_order,
        handlers::order::delete_order,
        handlers::food::get_foods,
        handlers::food::get_food,
        handlers::food::create_food,
        handlers::food::update_food,
        handlers::food::delete_food,
        handlers::offer::get_active_offers,
        handlers::offer::get_all_offers,
        handlers::offer::create_offer,
        handlers::offer::update_offer,
        handlers::offer::delete_offer,
        handlers::cart::get_cart,
        handlers::cart::add_to_cart,
        handlers::cart::update_cart_item,
        handlers::cart::remove_from_cart,
        handlers::cart::clear_cart,
        handlers::admin::login,
        handlers::admin::refresh,
        handlers::admin::check,
        handlers::admin::list_admins,
        handlers::admin::add_admin,
        handlers::admin::remove_admin,
        handlers::payment::initiate_payment,
        handlers::payment::payment_status,
        handlers::push::subscribe,
        handlers::push::unsubscribe,
        handlers::push::vapid_key,
        handlers::push::send,
    ),
    components(
        schemas(
            OrderStatus,
            PaymentStatus,
            PaymentMethod,
            FoodType,
            PushPlatform,
            FieldError,
            CreateOrderRequest,
            UpdateOrderRequest,
            OrderQuery,
            OrderResponse,
            CreateFoodRequest,
            UpdateFoodRequest,
            FoodResponse,
            CreateOfferRequest,
            UpdateOfferRequest,
            OfferResponse,
            CartQuery,
            AddToCartRequest,
            UpdateCartItemRequest,
            RemoveFromCartRequest,
            ClearCartRequest,
            CartItemResponse,
            CartResponse,
            AdminLoginRequest,
            RefreshTokenRequest,
            AdminProfile,
            AuthResponse,
            AddAdminRequest,
            RemoveAdminRequest,
            AdminCheckQuery,
            AdminStatusResponse,
            InitiatePaymentRequest,
            InitiatePaymentResponse,
            SubscribeRequest,
            UnsubscribeRequest,
            SendPushRequest,
            VapidKeyResponse,
            NotificationPayload,
            PaginationParams,
            PaginationInfo,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Service diagnostics"),
        (name = "order", description = "Order placement and tracking"),
        (name = "food", description = "Menu management"),
        (name = "offer", description = "Promotional offers"),
        (name = "cart", description = "Per-user shopping cart"),
        (name = "admin", description = "Admin accounts and authentication"),
        (name = "payment", description = "Payment gateway integration"),
        (name = "push", description = "Push notification subscriptions"),
    ),
    info(
        title = "TasteBite Backend API",
        version = "1.0.0",
        description = "Restaurant ordering REST API documentation"
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
