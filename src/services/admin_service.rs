use crate::database::DbPool;
use crate::entities::admin_entity;
use crate::error::{AppError, AppResult, FieldError};
use crate::models::{
    AddAdminRequest, AdminLoginRequest, AdminProfile, AdminStatusResponse, AuthResponse,
    RemoveAdminRequest,
};
use crate::utils::jwt::{Claims, JwtService};
use crate::utils::{hash_password, is_valid_email, normalize_email, validate_password, verify_password};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

fn role_of(admin: &admin_entity::Model) -> &'static str {
    if admin.is_super_admin {
        "superadmin"
    } else {
        "admin"
    }
}

#[derive(Clone)]
pub struct AdminService {
    db: DbPool,
    jwt: JwtService,
}

impl AdminService {
    pub fn new(db: DbPool, jwt: JwtService) -> Self {
        Self { db, jwt }
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<admin_entity::Model>> {
        Ok(admin_entity::Entity::find()
            .filter(admin_entity::Column::Email.eq(normalize_email(email)))
            .one(&self.db)
            .await?)
    }

    fn auth_response(&self, admin: admin_entity::Model) -> AppResult<AuthResponse> {
        let role = role_of(&admin);
        let access_token = self.jwt.generate_access_token(admin.id, &admin.email, role)?;
        let refresh_token = self
            .jwt
            .generate_refresh_token(admin.id, &admin.email, role)?;

        Ok(AuthResponse {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt.get_access_token_expires_in(),
            admin: admin.into(),
        })
    }

    /// Login failures are deliberately indistinguishable: wrong email and
    /// wrong password get the same 401.
    pub async fn login(&self, req: &AdminLoginRequest) -> AppResult<AuthResponse> {
        if !is_valid_email(&req.email) || req.password.is_empty() {
            return Err(AppError::AuthError("Invalid email or password".to_string()));
        }

        let admin = self
            .find_by_email(&req.email)
            .await?
            .ok_or_else(|| AppError::AuthError("Invalid email or password".to_string()))?;

        if !verify_password(&req.password, &admin.password_hash)? {
            return Err(AppError::AuthError("Invalid email or password".to_string()));
        }

        self.auth_response(admin)
    }

    /// Re-reads the admin row so a revoked admin cannot keep refreshing.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<AuthResponse> {
        let claims = self.jwt.verify_refresh_token(refresh_token)?;
        let admin_id: i64 = claims
            .sub
            .parse()
            .map_err(|_| AppError::AuthError("Invalid token subject".to_string()))?;

        let admin = admin_entity::Entity::find_by_id(admin_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::AuthError("Admin account no longer exists".to_string()))?;

        self.auth_response(admin)
    }

    /// Public probe the storefront uses to decide whether to show the
    /// dashboard entry point.
    pub async fn check_status(&self, email: &str) -> AppResult<AdminStatusResponse> {
        let admin = self.find_by_email(email).await?;
        Ok(AdminStatusResponse {
            is_super_admin: admin.as_ref().is_some_and(|a| a.is_super_admin),
            is_admin: admin.is_some(),
        })
    }

    pub async fn list_admins(&self, claims: &Claims) -> AppResult<Vec<AdminProfile>> {
        if !claims.is_super_admin() {
            return Err(AppError::Forbidden(
                "Only the super admin can list admins".to_string(),
            ));
        }

        let admins = admin_entity::Entity::find()
            .order_by_asc(admin_entity::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(admins.into_iter().map(Into::into).collect())
    }

    /// New admins are always regular admins; there is exactly one super
    /// admin and the API cannot mint another.
    pub async fn add_admin(&self, claims: &Claims, req: &AddAdminRequest) -> AppResult<AdminProfile> {
        if !claims.is_super_admin() {
            return Err(AppError::Forbidden(
                "Only the super admin can add admins".to_string(),
            ));
        }
        if !is_valid_email(&req.email) {
            return Err(AppError::validation(vec![FieldError::new(
                "email",
                "Valid email is required",
            )]));
        }
        validate_password(&req.password)?;

        let email = normalize_email(&req.email);
        if self.find_by_email(&email).await?.is_some() {
            return Err(AppError::Duplicate(
                "This email is already an admin".to_string(),
            ));
        }

        let now = Utc::now();
        let admin = admin_entity::ActiveModel {
            email: Set(email.clone()),
            password_hash: Set(hash_password(&req.password)?),
            display_name: Set(req
                .display_name
                .clone()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| email.clone())),
            is_super_admin: Set(false),
            created_by: Set(claims.email.clone()),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(admin.into())
    }

    pub async fn remove_admin(&self, claims: &Claims, req: &RemoveAdminRequest) -> AppResult<()> {
        if !claims.is_super_admin() {
            return Err(AppError::Forbidden(
                "Only the super admin can remove admins".to_string(),
            ));
        }

        let email = normalize_email(&req.email);
        if email == normalize_email(&claims.email) {
            return Err(AppError::Forbidden(
                "You cannot remove yourself".to_string(),
            ));
        }

        let admin = self
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound("Admin not found".to_string()))?;

        if admin.is_super_admin {
            return Err(AppError::Forbidden(
                "The super admin cannot be removed".to_string(),
            ));
        }

        admin_entity::Entity::delete_by_id(admin.id)
            .exec(&self.db)
            .await?;
        Ok(())
    }

    /// Startup seeding. Creates the super admin on first boot; later boots
    /// leave the stored password untouched.
    pub async fn ensure_super_admin(&self, email: &str, password: &str) -> AppResult<()> {
        let email = normalize_email(email);
        if self.find_by_email(&email).await?.is_some() {
            return Ok(());
        }

        validate_password(password)?;
        let now = Utc::now();
        admin_entity::ActiveModel {
            email: Set(email.clone()),
            password_hash: Set(hash_password(password)?),
            display_name: Set("Super Admin".to_string()),
            is_super_admin: Set(true),
            created_by: Set("system".to_string()),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        log::info!("Seeded super admin account {email}");
        Ok(())
    }
}
