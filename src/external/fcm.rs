use crate::config::PushConfig;
use crate::error::{AppError, AppResult};
use crate::models::NotificationPayload;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const DEFAULT_FCM_ENDPOINT: &str = "https://fcm.googleapis.com/fcm/send";

/// Delivery result for a single device token.
#[derive(Debug, PartialEq, Eq)]
pub enum SendOutcome {
    Delivered,
    /// The relay reported the token gone; the caller should drop the
    /// subscription.
    InvalidToken,
}

#[derive(Debug, Serialize)]
struct FcmNotification<'a> {
    title: &'a str,
    body: &'a str,
    icon: &'a str,
    badge: &'a str,
    tag: &'a str,
}

#[derive(Debug, Serialize)]
struct FcmMessage<'a> {
    to: &'a str,
    notification: FcmNotification<'a>,
    data: &'a serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct FcmResult {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FcmResponse {
    #[serde(default)]
    failure: i64,
    #[serde(default)]
    results: Vec<FcmResult>,
}

#[derive(Clone)]
pub struct FcmClient {
    client: Client,
    config: PushConfig,
}

impl FcmClient {
    pub fn new(config: PushConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.config.fcm_server_key.is_empty()
    }

    pub async fn send(&self, token: &str, payload: &NotificationPayload) -> AppResult<SendOutcome> {
        let endpoint = self
            .config
            .fcm_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_FCM_ENDPOINT);

        let message = FcmMessage {
            to: token,
            notification: FcmNotification {
                title: &payload.title,
                body: &payload.body,
                icon: &payload.icon,
                badge: &payload.badge,
                tag: &payload.tag,
            },
            data: &payload.data,
        };

        let response = self
            .client
            .post(endpoint)
            .header(
                "Authorization",
                format!("key={}", self.config.fcm_server_key),
            )
            .json(&message)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "Push delivery failed: {error_text}"
            )));
        }

        let body: FcmResponse = response.json().await?;
        if body.failure > 0 {
            let token_gone = body.results.iter().any(|r| {
                matches!(
                    r.error.as_deref(),
                    Some("NotRegistered") | Some("InvalidRegistration")
                )
            });
            if token_gone {
                return Ok(SendOutcome::InvalidToken);
            }
            return Err(AppError::ExternalApiError(
                "Push delivery rejected by relay".to_string(),
            ));
        }

        Ok(SendOutcome::Delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_wire_shape() {
        let payload = NotificationPayload::new("New Order", "Paneer Tikka x2")
            .with_tag("admin-order-9")
            .with_data(serde_json::json!({"orderId": 9}));
        let message = FcmMessage {
            to: "token-abc",
            notification: FcmNotification {
                title: &payload.title,
                body: &payload.body,
                icon: &payload.icon,
                badge: &payload.badge,
                tag: &payload.tag,
            },
            data: &payload.data,
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["to"], "token-abc");
        assert_eq!(json["notification"]["title"], "New Order");
        assert_eq!(json["data"]["orderId"], 9);
    }

    #[test]
    fn test_invalid_token_detected_in_response() {
        let body: FcmResponse = serde_json::from_str(
            r#"{"multicast_id":1,"success":0,"failure":1,"results":[{"error":"NotRegistered"}]}"#,
        )
        .unwrap();
        assert_eq!(body.failure, 1);
        assert_eq!(body.results[0].error.as_deref(), Some("NotRegistered"));
    }
}
