use crate::database::DbPool;
use crate::entities::{admin_entity, push_subscription_entity, PushPlatform};
use crate::error::{AppError, AppResult, FieldError};
use crate::external::{FcmClient, SendOutcome};
use crate::models::{NotificationPayload, SendPushRequest, SubscribeRequest};
use crate::utils::{is_valid_email, normalize_email};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

/// Registers device tokens and relays notifications to them. Delivery is
/// best-effort: a dead token gets pruned, a transient failure gets logged.
#[derive(Clone)]
pub struct PushService {
    db: DbPool,
    fcm: FcmClient,
    icon_url: Option<String>,
}

impl PushService {
    pub fn new(db: DbPool, fcm: FcmClient, icon_url: Option<String>) -> Self {
        Self { db, fcm, icon_url }
    }

    pub fn payload(&self, title: impl Into<String>, body: impl Into<String>) -> NotificationPayload {
        let payload = NotificationPayload::new(title, body);
        match &self.icon_url {
            Some(icon) => payload.with_icon(icon.clone()),
            None => payload,
        }
    }

    /// Upserts by token so a device that re-subscribes under a new email
    /// moves instead of duplicating.
    pub async fn subscribe(&self, req: &SubscribeRequest) -> AppResult<()> {
        let mut errors = Vec::new();
        if !is_valid_email(&req.user_email) {
            errors.push(FieldError::new("user_email", "Valid email is required"));
        }
        if req.fcm_token.trim().is_empty() {
            errors.push(FieldError::new("fcm_token", "Device token is required"));
        }
        if !errors.is_empty() {
            return Err(AppError::validation(errors));
        }

        let email = normalize_email(&req.user_email);
        let token = req.fcm_token.trim().to_string();
        let platform = req.platform.clone().unwrap_or(PushPlatform::Fcm);
        let now = Utc::now();

        let existing = push_subscription_entity::Entity::find()
            .filter(push_subscription_entity::Column::FcmToken.eq(token.clone()))
            .one(&self.db)
            .await?;

        match existing {
            Some(sub) => {
                let mut active: push_subscription_entity::ActiveModel = sub.into();
                active.user_email = Set(email);
                active.platform = Set(platform);
                active.updated_at = Set(Some(now));
                active.update(&self.db).await?;
            }
            None => {
                push_subscription_entity::ActiveModel {
                    user_email: Set(email),
                    fcm_token: Set(token),
                    platform: Set(platform),
                    created_at: Set(Some(now)),
                    updated_at: Set(Some(now)),
                    ..Default::default()
                }
                .insert(&self.db)
                .await?;
            }
        }

        Ok(())
    }

    /// Removes every subscription for the email. Returns how many were
    /// dropped; zero is not an error.
    pub async fn unsubscribe(&self, user_email: &str) -> AppResult<u64> {
        let result = push_subscription_entity::Entity::delete_many()
            .filter(push_subscription_entity::Column::UserEmail.eq(normalize_email(user_email)))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn send_to_user(
        &self,
        user_email: &str,
        payload: &NotificationPayload,
    ) -> AppResult<usize> {
        if !self.fcm.is_configured() {
            log::debug!("Push relay not configured; skipping notification");
            return Ok(0);
        }

        let subscriptions = push_subscription_entity::Entity::find()
            .filter(push_subscription_entity::Column::UserEmail.eq(normalize_email(user_email)))
            .all(&self.db)
            .await?;

        self.dispatch(subscriptions, payload).await
    }

    /// Fans a notification out to every registered admin device.
    pub async fn send_to_admins(&self, payload: &NotificationPayload) -> AppResult<usize> {
        if !self.fcm.is_configured() {
            log::debug!("Push relay not configured; skipping notification");
            return Ok(0);
        }

        let admin_emails: Vec<String> = admin_entity::Entity::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(|a| a.email)
            .collect();

        if admin_emails.is_empty() {
            return Ok(0);
        }

        let subscriptions = push_subscription_entity::Entity::find()
            .filter(push_subscription_entity::Column::UserEmail.is_in(admin_emails))
            .all(&self.db)
            .await?;

        self.dispatch(subscriptions, payload).await
    }

    /// Manual send, used by the admin dashboard. 404s when the user has no
    /// registered devices so the operator can tell silence from absence.
    pub async fn send(&self, req: &SendPushRequest) -> AppResult<usize> {
        if !is_valid_email(&req.user_email) {
            return Err(AppError::validation(vec![FieldError::new(
                "user_email",
                "Valid email is required",
            )]));
        }

        let subscriptions = push_subscription_entity::Entity::find()
            .filter(push_subscription_entity::Column::UserEmail.eq(normalize_email(&req.user_email)))
            .all(&self.db)
            .await?;

        if subscriptions.is_empty() {
            return Err(AppError::NotFound(
                "No push subscriptions found for this user".to_string(),
            ));
        }

        let mut payload = self.payload(req.title.clone(), req.body.clone());
        if let Some(icon) = &req.icon {
            payload = payload.with_icon(icon.clone());
        }
        if let Some(tag) = &req.tag {
            payload = payload.with_tag(tag.clone());
        }
        if let Some(data) = &req.data {
            payload = payload.with_data(data.clone());
        }

        self.dispatch(subscriptions, &payload).await
    }

    async fn dispatch(
        &self,
        subscriptions: Vec<push_subscription_entity::Model>,
        payload: &NotificationPayload,
    ) -> AppResult<usize> {
        let mut delivered = 0;

        for sub in subscriptions {
            match self.fcm.send(&sub.fcm_token, payload).await {
                Ok(SendOutcome::Delivered) => delivered += 1,
                Ok(SendOutcome::InvalidToken) => {
                    log::info!(
                        "Pruning dead push subscription {} for {}",
                        sub.id,
                        sub.user_email
                    );
                    push_subscription_entity::Entity::delete_by_id(sub.id)
                        .exec(&self.db)
                        .await?;
                }
                Err(e) => {
                    log::warn!("Push delivery to subscription {} failed: {e}", sub.id);
                }
            }
        }

        Ok(delivered)
    }
}
