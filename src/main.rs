use actix_web::{middleware::Logger, web, App, HttpServer};
use chrono::Local;
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use tastebite_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    external::{FcmClient, PhonePeClient},
    handlers,
    middlewares::{create_cors, AuthMiddleware},
    services::*,
    swagger::swagger_config,
    utils::JwtService,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    let config = Config::from_toml().expect("Failed to load configuration file");

    let pool = create_pool(&config.database)
        .await
        .expect("Failed to create database connection pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let jwt_service = JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expires_in,
        config.jwt.refresh_token_expires_in,
    );

    let phonepe_client = PhonePeClient::new(config.phonepe.clone());
    let fcm_client = FcmClient::new(config.push.clone());

    let push_service = PushService::new(
        pool.clone(),
        fcm_client,
        config.push.icon_url.clone(),
    );
    let order_service = OrderService::new(pool.clone(), push_service.clone());
    let food_service = FoodService::new(pool.clone());
    let offer_service = OfferService::new(pool.clone());
    let cart_service = CartService::new(pool.clone());
    let admin_service = AdminService::new(pool.clone(), jwt_service.clone());

    // First boot seeds the super admin account from the environment.
    match (
        std::env::var("SUPER_ADMIN_EMAIL"),
        std::env::var("SUPER_ADMIN_PASSWORD"),
    ) {
        (Ok(email), Ok(password)) => {
            if let Err(e) = admin_service.ensure_super_admin(&email, &password).await {
                log::error!("Failed to seed super admin: {e}");
            }
        }
        _ => {
            log::warn!("SUPER_ADMIN_EMAIL/SUPER_ADMIN_PASSWORD not set; skipping admin seeding");
        }
    }

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );
    let bind_addr = (config.server.host.clone(), config.server.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .wrap(AuthMiddleware::new(jwt_service.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(order_service.clone()))
            .app_data(web::Data::new(food_service.clone()))
            .app_data(web::Data::new(offer_service.clone()))
            .app_data(web::Data::new(cart_service.clone()))
            .app_data(web::Data::new(admin_service.clone()))
            .app_data(web::Data::new(push_service.clone()))
            .app_data(web::Data::new(phonepe_client.clone()))
            .configure(swagger_config)
            .service(
                web::scope("/api")
                    .configure(handlers::health_config)
                    .configure(handlers::order_config)
                    .configure(handlers::food_config)
                    .configure(handlers::offer_config)
                    .configure(handlers::cart_config)
                    .configure(handlers::admin_config)
                    .configure(handlers::payment_config)
                    .configure(handlers::push_config),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
