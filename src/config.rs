use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub phonepe: PhonePeConfig,
    #[serde(default)]
    pub push: PushConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expires_in: i64,  // seconds
    pub refresh_token_expires_in: i64, // seconds
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhonePeConfig {
    pub merchant_id: String,
    pub salt_key: String,
    pub salt_index: String,
    pub base_url: String,
    pub status_url: String,
    /// Frontend page the gateway redirects to after payment.
    pub redirect_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PushConfig {
    pub fcm_server_key: String,
    #[serde(default)]
    pub fcm_endpoint: Option<String>,
    pub vapid_public_key: String,
    #[serde(default)]
    pub icon_url: Option<String>,
}

fn get_env(name: &str) -> Option<String> {
    env::var(name).ok()
}

fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_toml() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // Missing config file is fine as long as the environment carries
        // everything; a present but unreadable/unparsable file is not.
        let config_result = std::fs::read_to_string(&config_path);

        let mut config: Config = match config_result {
            Ok(config_str) => {
                toml::from_str(&config_str)
                    .map_err(|e| format!("Failed to parse config file: {e}"))?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let database_url = get_env("DATABASE_URL").ok_or(
                    "DATABASE_URL environment variable is required when config.toml is absent",
                )?;

                Config {
                    server: ServerConfig {
                        host: get_env("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                        port: get_env_parse("SERVER_PORT", 8080u16),
                    },
                    database: DatabaseConfig {
                        url: database_url,
                        max_connections: get_env_parse("DB_MAX_CONNECTIONS", 10u32),
                    },
                    jwt: JwtConfig {
                        secret: get_env("JWT_SECRET")
                            .unwrap_or_else(|| "change-me-in-production".to_string()),
                        access_token_expires_in: get_env_parse("JWT_ACCESS_EXPIRES_IN", 86_400i64),
                        refresh_token_expires_in: get_env_parse(
                            "JWT_REFRESH_EXPIRES_IN",
                            2_592_000i64,
                        ),
                    },
                    phonepe: PhonePeConfig {
                        merchant_id: get_env("PHONEPE_MERCHANT_ID").unwrap_or_default(),
                        salt_key: get_env("PHONEPE_SALT_KEY").unwrap_or_default(),
                        salt_index: get_env("PHONEPE_SALT_INDEX")
                            .unwrap_or_else(|| "1".to_string()),
                        base_url: get_env("PHONEPE_BASE_URL").unwrap_or_else(|| {
                            "https://api.phonepe.com/apis/hermes/pg/v1/pay".to_string()
                        }),
                        status_url: get_env("PHONEPE_STATUS_URL").unwrap_or_else(|| {
                            "https://api.phonepe.com/apis/hermes/pg/v1/status".to_string()
                        }),
                        redirect_url: get_env("PHONEPE_REDIRECT_URL").unwrap_or_else(|| {
                            "https://tastebite.example.com/payment-success".to_string()
                        }),
                    },
                    push: PushConfig {
                        fcm_server_key: get_env("FCM_SERVER_KEY").unwrap_or_default(),
                        fcm_endpoint: get_env("FCM_ENDPOINT"),
                        vapid_public_key: get_env("VAPID_PUBLIC_KEY").unwrap_or_default(),
                        icon_url: get_env("PUSH_ICON_URL"),
                    },
                }
            }
            Err(e) => {
                return Err(format!("Failed to read config file {config_path}: {e}").into());
            }
        };

        // Environment overrides apply even when the file exists.
        if let Ok(v) = env::var("SERVER_HOST") {
            config.server.host = v;
        }
        if let Some(p) = env::var("SERVER_PORT").ok().and_then(|v| v.parse().ok()) {
            config.server.port = p;
        }
        if let Ok(v) = env::var("DATABASE_URL") {
            config.database.url = v;
        }
        if let Some(mc) = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.database.max_connections = mc;
        }
        if let Ok(v) = env::var("JWT_SECRET") {
            config.jwt.secret = v;
        }
        if let Some(n) = env::var("JWT_ACCESS_EXPIRES_IN")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.jwt.access_token_expires_in = n;
        }
        if let Some(n) = env::var("JWT_REFRESH_EXPIRES_IN")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.jwt.refresh_token_expires_in = n;
        }
        if let Ok(v) = env::var("PHONEPE_MERCHANT_ID") {
            config.phonepe.merchant_id = v;
        }
        if let Ok(v) = env::var("PHONEPE_SALT_KEY") {
            config.phonepe.salt_key = v;
        }
        if let Ok(v) = env::var("PHONEPE_SALT_INDEX") {
            config.phonepe.salt_index = v;
        }
        if let Ok(v) = env::var("PHONEPE_BASE_URL") {
            config.phonepe.base_url = v;
        }
        if let Ok(v) = env::var("PHONEPE_STATUS_URL") {
            config.phonepe.status_url = v;
        }
        if let Ok(v) = env::var("PHONEPE_REDIRECT_URL") {
            config.phonepe.redirect_url = v;
        }
        if let Ok(v) = env::var("FCM_SERVER_KEY") {
            config.push.fcm_server_key = v;
        }
        if let Ok(v) = env::var("FCM_ENDPOINT") {
            config.push.fcm_endpoint = Some(v);
        }
        if let Ok(v) = env::var("VAPID_PUBLIC_KEY") {
            config.push.vapid_public_key = v;
        }
        if let Ok(v) = env::var("PUSH_ICON_URL") {
            config.push.icon_url = Some(v);
        }

        Ok(config)
    }
}
