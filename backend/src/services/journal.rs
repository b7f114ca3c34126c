//! Journal service
//!
//! Owner-scoped CRUD over journal entries with tags and an optional mood.

use crate::error::ApiError;
use crate::repositories::{CreateJournalEntry, JournalRepository, UpdateJournalEntry};
use crate::repositories::journal::JournalEntryRecord;
use fitlikeus_shared::types::{
    CreateJournalEntryRequest, JournalEntryResponse, UpdateJournalEntryRequest,
};
use fitlikeus_shared::validation::{validate_mood_score, validate_title};
use sqlx::PgPool;
use uuid::Uuid;

/// Journal service for business logic
pub struct JournalService;

impl JournalService {
    /// Create a journal entry
    pub async fn create_entry(
        pool: &PgPool,
        user_id: Uuid,
        req: CreateJournalEntryRequest,
    ) -> Result<JournalEntryResponse, ApiError> {
        validate_title(&req.title).map_err(ApiError::Validation)?;
        if req.content.trim().is_empty() {
            return Err(ApiError::Validation("Content cannot be empty".to_string()));
        }
        if let Some(mood) = req.mood {
            validate_mood_score(mood).map_err(ApiError::Validation)?;
        }

        let input = CreateJournalEntry {
            user_id,
            title: req.title,
            content: req.content,
            mood: req.mood,
            workout_id: req.workout_id,
            tags: req.tags,
        };

        let record = JournalRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)?;

        Ok(Self::to_response(record))
    }

    /// Get all journal entries for a user, newest first
    pub async fn get_entries(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<JournalEntryResponse>, ApiError> {
        let records = JournalRepository::get_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Self::to_response).collect())
    }

    /// Update a journal entry; absent fields stay as they were
    pub async fn update_entry(
        pool: &PgPool,
        user_id: Uuid,
        entry_id: Uuid,
        req: UpdateJournalEntryRequest,
    ) -> Result<JournalEntryResponse, ApiError> {
        if let Some(title) = &req.title {
            validate_title(title).map_err(ApiError::Validation)?;
        }
        if let Some(content) = &req.content {
            if content.trim().is_empty() {
                return Err(ApiError::Validation("Content cannot be empty".to_string()));
            }
        }
        if let Some(mood) = req.mood {
            validate_mood_score(mood).map_err(ApiError::Validation)?;
        }

        let updates = UpdateJournalEntry {
            title: req.title,
            content: req.content,
            mood: req.mood,
            tags: req.tags,
        };

        let record = JournalRepository::update(pool, entry_id, user_id, updates)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Journal entry not found".to_string()))?;

        Ok(Self::to_response(record))
    }

    /// Delete a journal entry
    pub async fn delete_entry(pool: &PgPool, user_id: Uuid, entry_id: Uuid) -> Result<(), ApiError> {
        let deleted = JournalRepository::delete(pool, entry_id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Journal entry not found".to_string()));
        }
        Ok(())
    }

    fn to_response(record: JournalEntryRecord) -> JournalEntryResponse {
        JournalEntryResponse {
            id: record.id.to_string(),
            title: record.title,
            content: record.content,
            mood: record.mood,
            workout_id: record.workout_id.map(|id| id.to_string()),
            tags: record.tags,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    // Database-backed flows are covered by the integration suite
}
