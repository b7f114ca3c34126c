//! Password-reset repository for database operations
//!
//! Each issued reset token has a row keyed by the token id embedded in the
//! JWT. Consumption is a single atomic UPDATE so a token can only be spent
//! once even under concurrent confirmation attempts.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Password-reset record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PasswordResetRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Password-reset repository for database operations
pub struct PasswordResetRepository;

impl PasswordResetRepository {
    /// Record an issued reset token
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        token_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<PasswordResetRecord> {
        let record = sqlx::query_as::<_, PasswordResetRecord>(
            r#"
            INSERT INTO password_resets (user_id, token_id, expires_at)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, token_id, expires_at, used_at, created_at
            "#,
        )
        .bind(user_id)
        .bind(token_id)
        .bind(expires_at)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Atomically consume an unused, unexpired reset token
    ///
    /// Returns the record when the token was valid; None when it was
    /// unknown, already spent, or expired.
    pub async fn consume(pool: &PgPool, token_id: Uuid) -> Result<Option<PasswordResetRecord>> {
        let record = sqlx::query_as::<_, PasswordResetRecord>(
            r#"
            UPDATE password_resets SET used_at = NOW()
            WHERE token_id = $1 AND used_at IS NULL AND expires_at > NOW()
            RETURNING id, user_id, token_id, expires_at, used_at, created_at
            "#,
        )
        .bind(token_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - marked with #[ignore]
}
