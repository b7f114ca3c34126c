//! User service for authentication and account management
//!
//! Password hashing and verification run on the blocking thread pool; the
//! JWT service is passed by reference so its pre-computed keys are reused.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{PasswordResetRepository, UserRepository};
use crate::repositories::user::UserRecord;
use chrono::{Duration, Utc};
use fitlikeus_shared::types::{AuthTokens, UserProfileResponse};
use fitlikeus_shared::validation::{password_strength, validate_password};
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;
use validator::ValidateEmail;

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user
    pub async fn register(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<AuthTokens, ApiError> {
        // Validate email format
        if !email.validate_email() {
            return Err(ApiError::Validation("Invalid email format".to_string()));
        }

        // Validate password: length bounds plus the signup strength rules
        validate_password(password).map_err(ApiError::Validation)?;
        if !password_strength(password).is_valid {
            return Err(ApiError::weak_password());
        }

        // Check if email already exists
        if UserRepository::email_exists(pool, email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::email_in_use());
        }

        // Hash password on blocking thread pool (CPU-intensive)
        let password_owned = password.to_string();
        let password_hash = PasswordService::hash_async(password_owned)
            .await
            .map_err(ApiError::Internal)?;

        // Create user
        let user = UserRepository::create(pool, email, &password_hash, display_name)
            .await
            .map_err(ApiError::Internal)?;

        info!(user_id = %user.id, "User registered");

        Self::issue_tokens(jwt_service, user.id)
    }

    /// Login with email and password
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<AuthTokens, ApiError> {
        // Find user by email
        let user = UserRepository::find_by_email(pool, email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(ApiError::invalid_credentials)?;

        // Verify password on blocking thread pool (CPU-intensive)
        let password_owned = password.to_string();
        let hash_owned = user.password_hash.clone();
        let valid = PasswordService::verify_async(password_owned, hash_owned)
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::invalid_credentials());
        }

        Self::issue_tokens(jwt_service, user.id)
    }

    /// Refresh access token using refresh token
    pub async fn refresh_token(
        pool: &PgPool,
        jwt_service: &JwtService,
        refresh_token: &str,
    ) -> Result<AuthTokens, ApiError> {
        // Validate refresh token
        let claims = jwt_service
            .validate_refresh_token(refresh_token)
            .map_err(|e| ApiError::Unauthorized(format!("Invalid refresh token: {}", e)))?;

        // Parse user ID
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Unauthorized("Invalid user ID in token".to_string()))?;

        // Verify user still exists
        let _user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))?;

        Self::issue_tokens(jwt_service, user_id)
    }

    /// Get user profile
    pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<UserProfileResponse, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Self::profile_response(user)
    }

    /// Issue a password-reset token for the account behind `email`
    ///
    /// Returns Ok regardless of whether the email is registered so the
    /// endpoint cannot be used for account enumeration. Token delivery is
    /// an operational concern; the token is surfaced through the log.
    pub async fn request_password_reset(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
    ) -> Result<(), ApiError> {
        let Some(user) = UserRepository::find_by_email(pool, email)
            .await
            .map_err(ApiError::Internal)?
        else {
            debug!("Password reset requested for unknown email");
            return Ok(());
        };

        let token_id = Uuid::new_v4();
        let expires_at = Utc::now() + Duration::seconds(jwt_service.reset_token_expiry_secs());

        PasswordResetRepository::create(pool, user.id, token_id, expires_at)
            .await
            .map_err(ApiError::Internal)?;

        let token = jwt_service
            .generate_reset_token(user.id, token_id)
            .map_err(ApiError::Internal)?;

        info!(user_id = %user.id, "Password reset token issued");
        debug!(reset_token = %token, "Password reset token (development delivery)");

        Ok(())
    }

    /// Confirm a password reset: spend the token and replace the password
    pub async fn confirm_password_reset(
        pool: &PgPool,
        jwt_service: &JwtService,
        token: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let claims = jwt_service
            .validate_reset_token(token)
            .map_err(|e| ApiError::Unauthorized(format!("Invalid reset token: {}", e)))?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Unauthorized("Invalid user ID in token".to_string()))?;
        let token_id = claims
            .jti
            .as_deref()
            .and_then(|jti| Uuid::parse_str(jti).ok())
            .ok_or_else(|| ApiError::Unauthorized("Invalid reset token".to_string()))?;

        validate_password(new_password).map_err(ApiError::Validation)?;
        if !password_strength(new_password).is_valid {
            return Err(ApiError::weak_password());
        }

        // Atomic single-use: fails for unknown, spent, or expired tokens
        let reset = PasswordResetRepository::consume(pool, token_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| {
                ApiError::Unauthorized("Reset token already used or expired".to_string())
            })?;

        if reset.user_id != user_id {
            return Err(ApiError::Unauthorized("Invalid reset token".to_string()));
        }

        let password_hash = PasswordService::hash_async(new_password.to_string())
            .await
            .map_err(ApiError::Internal)?;

        UserRepository::update_password(pool, user_id, &password_hash)
            .await
            .map_err(ApiError::Internal)?;

        info!(user_id = %user_id, "Password reset completed");
        Ok(())
    }

    /// Map a database record to the profile response
    pub fn profile_response(user: UserRecord) -> Result<UserProfileResponse, ApiError> {
        let role = user
            .role
            .parse()
            .map_err(|e: String| ApiError::Internal(anyhow::anyhow!(e)))?;
        let level = user
            .level
            .parse()
            .map_err(|e: String| ApiError::Internal(anyhow::anyhow!(e)))?;
        let plan = user
            .plan
            .parse()
            .map_err(|e: String| ApiError::Internal(anyhow::anyhow!(e)))?;

        Ok(UserProfileResponse {
            id: user.id.to_string(),
            email: user.email,
            role,
            display_name: user.display_name,
            level,
            plan,
            premium_expires_at: user.premium_expires_at,
            created_at: user.created_at,
        })
    }

    fn issue_tokens(jwt_service: &JwtService, user_id: Uuid) -> Result<AuthTokens, ApiError> {
        let access_token = jwt_service
            .generate_access_token(user_id)
            .map_err(ApiError::Internal)?;
        let refresh_token = jwt_service
            .generate_refresh_token(user_id)
            .map_err(ApiError::Internal)?;

        Ok(AuthTokens {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: jwt_service.access_token_expiry_secs(),
        })
    }
}

#[cfg(test)]
mod tests {
    // Database-backed flows are covered by the integration suite
}
