//! Resource catalog service
//!
//! The catalog is always listed in full; premium entries served to a
//! non-premium caller come back locked, with link and content withheld
//! server-side rather than trusting the client to hide them.

use crate::error::ApiError;
use crate::repositories::{CreateResource, ResourceRepository, UpdateResource, UserRepository};
use crate::repositories::resource::ResourceRecord;
use crate::services::PremiumService;
use chrono::Utc;
use fitlikeus_shared::models::{Plan, ResourceCategory};
use fitlikeus_shared::types::{CreateResourceRequest, ResourceResponse, UpdateResourceRequest};
use fitlikeus_shared::validation::validate_title;
use sqlx::PgPool;
use uuid::Uuid;

/// Resource service for business logic
pub struct ResourceService;

impl ResourceService {
    /// List the catalog for a user, locking premium entries when the
    /// caller's plan does not grant access
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<ResourceResponse>, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let plan = user
            .plan
            .parse::<Plan>()
            .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))?;
        let has_premium = PremiumService::is_premium(plan, user.premium_expires_at, Utc::now());

        let records = ResourceRepository::list(pool)
            .await
            .map_err(ApiError::Internal)?;

        records
            .into_iter()
            .map(|r| Self::to_response(r, has_premium))
            .collect()
    }

    /// Create a resource (admin)
    pub async fn create(
        pool: &PgPool,
        req: CreateResourceRequest,
    ) -> Result<ResourceResponse, ApiError> {
        validate_title(&req.title).map_err(ApiError::Validation)?;

        let input = CreateResource {
            title: req.title,
            description: req.description,
            category: req.category.to_string(),
            link: req.link,
            content: req.content,
            premium: req.premium,
        };

        let record = ResourceRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)?;

        Self::to_response(record, true)
    }

    /// Update a resource (admin)
    pub async fn update(
        pool: &PgPool,
        resource_id: Uuid,
        req: UpdateResourceRequest,
    ) -> Result<ResourceResponse, ApiError> {
        if let Some(title) = &req.title {
            validate_title(title).map_err(ApiError::Validation)?;
        }

        let updates = UpdateResource {
            title: req.title,
            description: req.description,
            category: req.category.map(|c| c.to_string()),
            link: req.link,
            content: req.content,
            premium: req.premium,
        };

        let record = ResourceRepository::update(pool, resource_id, updates)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Resource not found".to_string()))?;

        Self::to_response(record, true)
    }

    /// Delete a resource (admin)
    pub async fn delete(pool: &PgPool, resource_id: Uuid) -> Result<(), ApiError> {
        let deleted = ResourceRepository::delete(pool, resource_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Resource not found".to_string()));
        }
        Ok(())
    }

    fn to_response(record: ResourceRecord, has_premium: bool) -> Result<ResourceResponse, ApiError> {
        let category = record
            .category
            .parse::<ResourceCategory>()
            .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))?;

        let locked = record.premium && !has_premium;
        let (link, content) = if locked {
            (None, None)
        } else {
            (record.link, record.content)
        };

        Ok(ResourceResponse {
            id: record.id.to_string(),
            title: record.title,
            description: record.description,
            category,
            premium: record.premium,
            locked,
            link,
            content,
            created_at: record.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(premium: bool) -> ResourceRecord {
        ResourceRecord {
            id: Uuid::new_v4(),
            title: "Meal prep basics".to_string(),
            description: "A starter guide".to_string(),
            category: "nutrition".to_string(),
            link: Some("https://example.com/guide".to_string()),
            content: Some("Full text".to_string()),
            premium,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_locked_resource_withholds_link_and_content() {
        let response = ResourceService::to_response(record(true), false).unwrap();
        assert!(response.locked);
        assert!(response.link.is_none());
        assert!(response.content.is_none());
    }

    #[test]
    fn test_premium_caller_sees_premium_content() {
        let response = ResourceService::to_response(record(true), true).unwrap();
        assert!(!response.locked);
        assert!(response.link.is_some());
        assert!(response.content.is_some());
    }

    #[test]
    fn test_free_resource_is_never_locked() {
        let response = ResourceService::to_response(record(false), false).unwrap();
        assert!(!response.locked);
        assert!(response.link.is_some());
    }
}
