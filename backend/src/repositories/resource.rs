//! Resource catalog repository for database operations
//!
//! Resources are read-only for clients; writes come from the admin surface.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Resource record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ResourceRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub link: Option<String>,
    pub content: Option<String>,
    pub premium: bool,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a resource
#[derive(Debug, Clone)]
pub struct CreateResource {
    pub title: String,
    pub description: String,
    pub category: String,
    pub link: Option<String>,
    pub content: Option<String>,
    pub premium: bool,
}

/// Input for updating a resource; None leaves the column unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateResource {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub link: Option<String>,
    pub content: Option<String>,
    pub premium: Option<bool>,
}

/// Resource repository for database operations
pub struct ResourceRepository;

impl ResourceRepository {
    /// List the full catalog, premium entries last within each category
    pub async fn list(pool: &PgPool) -> Result<Vec<ResourceRecord>> {
        let records = sqlx::query_as::<_, ResourceRecord>(
            r#"
            SELECT id, title, description, category, link, content, premium, created_at
            FROM resources
            ORDER BY category ASC, premium ASC, created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get resource by ID
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Option<ResourceRecord>> {
        let record = sqlx::query_as::<_, ResourceRecord>(
            r#"
            SELECT id, title, description, category, link, content, premium, created_at
            FROM resources
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Create a new resource
    pub async fn create(pool: &PgPool, input: CreateResource) -> Result<ResourceRecord> {
        let record = sqlx::query_as::<_, ResourceRecord>(
            r#"
            INSERT INTO resources (title, description, category, link, content, premium)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, description, category, link, content, premium, created_at
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.category)
        .bind(&input.link)
        .bind(&input.content)
        .bind(input.premium)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Update a resource
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        updates: UpdateResource,
    ) -> Result<Option<ResourceRecord>> {
        let record = sqlx::query_as::<_, ResourceRecord>(
            r#"
            UPDATE resources SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                link = COALESCE($5, link),
                content = COALESCE($6, content),
                premium = COALESCE($7, premium)
            WHERE id = $1
            RETURNING id, title, description, category, link, content, premium, created_at
            "#,
        )
        .bind(id)
        .bind(updates.title)
        .bind(updates.description)
        .bind(updates.category)
        .bind(updates.link)
        .bind(updates.content)
        .bind(updates.premium)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a resource
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM resources
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - marked with #[ignore]
}
