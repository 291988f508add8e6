use crate::entities::PushPlatform;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubscribeRequest {
    pub user_email: String,
    pub fcm_token: String,
    pub platform: Option<PushPlatform>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UnsubscribeRequest {
    pub user_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SendPushRequest {
    pub user_email: String,
    pub title: String,
    pub body: String,
    pub icon: Option<String>,
    pub tag: Option<String>,
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VapidKeyResponse {
    pub public_key: String,
}

/// What the service worker renders: `{title, body, icon, badge, tag, data}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationPayload {
    pub title: String,
    pub body: String,
    pub icon: String,
    pub badge: String,
    pub tag: String,
    pub data: serde_json::Value,
}

impl NotificationPayload {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            icon: "/favicon.ico".to_string(),
            badge: "/favicon.ico".to_string(),
            tag: "default".to_string(),
            data: serde_json::json!({}),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        let icon = icon.into();
        self.badge = icon.clone();
        self.icon = icon;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let payload = NotificationPayload::new("Order Placed", "Your order is in")
            .with_tag("order-12")
            .with_data(serde_json::json!({"orderId": 12, "type": "new_order"}));
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["title"], "Order Placed");
        assert_eq!(json["tag"], "order-12");
        assert_eq!(json["data"]["orderId"], 12);
        assert!(json.get("icon").is_some());
        assert!(json.get("badge").is_some());
    }
}
