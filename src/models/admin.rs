use crate::entities::admin_entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminLoginRequest {
    #[schema(example = "manager@tastebite.example.com")]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminProfile {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    pub is_super_admin: bool,
    pub created_by: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<admin_entity::Model> for AdminProfile {
    fn from(m: admin_entity::Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            display_name: m.display_name,
            is_super_admin: m.is_super_admin,
            created_by: m.created_by,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub admin: AdminProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddAdminRequest {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RemoveAdminRequest {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminCheckQuery {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminStatusResponse {
    pub is_admin: bool,
    pub is_super_admin: bool,
}
