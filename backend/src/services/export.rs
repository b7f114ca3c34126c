//! Data export service
//!
//! Lets a user take their data with them:
//! - JSON: full structured export of workouts, moods, journal, and streaks
//! - CSV: tabular workout history for spreadsheets

use crate::error::ApiError;
use crate::repositories::{
    JournalRepository, MoodRepository, StreakRepository, WorkoutRepository,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Complete user data export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDataExport {
    pub export_version: String,
    pub exported_at: DateTime<Utc>,
    pub user_id: String,
    pub workouts: Vec<WorkoutExport>,
    pub moods: Vec<MoodExport>,
    pub journal_entries: Vec<JournalEntryExport>,
    pub streaks: Vec<StreakExport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutExport {
    pub id: String,
    pub exercise: String,
    pub reps: i32,
    pub notes: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodExport {
    pub id: String,
    pub workout_id: String,
    pub score: i32,
    pub notes: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntryExport {
    pub id: String,
    pub title: String,
    pub content: String,
    pub mood: Option<i32>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakExport {
    pub habit_id: String,
    pub title: String,
    pub count: i32,
    pub last_completed_date: NaiveDate,
}

/// Export service for business logic
pub struct ExportService;

impl ExportService {
    /// Export all of a user's data as a single JSON document
    pub async fn export_json(pool: &PgPool, user_id: Uuid) -> Result<UserDataExport, ApiError> {
        let workouts = WorkoutRepository::get_all(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        let moods = MoodRepository::get_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        let journal_entries = JournalRepository::get_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        let streaks = StreakRepository::get_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(UserDataExport {
            export_version: "1.0".to_string(),
            exported_at: Utc::now(),
            user_id: user_id.to_string(),
            workouts: workouts
                .into_iter()
                .map(|w| WorkoutExport {
                    id: w.id.to_string(),
                    exercise: w.exercise,
                    reps: w.reps,
                    notes: w.notes,
                    recorded_at: w.recorded_at,
                })
                .collect(),
            moods: moods
                .into_iter()
                .map(|m| MoodExport {
                    id: m.id.to_string(),
                    workout_id: m.workout_id.to_string(),
                    score: m.score,
                    notes: m.notes,
                    recorded_at: m.recorded_at,
                })
                .collect(),
            journal_entries: journal_entries
                .into_iter()
                .map(|e| JournalEntryExport {
                    id: e.id.to_string(),
                    title: e.title,
                    content: e.content,
                    mood: e.mood,
                    tags: e.tags,
                    created_at: e.created_at,
                    updated_at: e.updated_at,
                })
                .collect(),
            streaks: streaks
                .into_iter()
                .map(|s| StreakExport {
                    habit_id: s.habit_id,
                    title: s.title,
                    count: s.count,
                    last_completed_date: s.last_completed_date,
                })
                .collect(),
        })
    }

    /// Export workout history as CSV
    pub async fn export_workouts_csv(pool: &PgPool, user_id: Uuid) -> Result<String, ApiError> {
        let workouts = WorkoutRepository::get_all(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record(["id", "exercise", "reps", "notes", "recorded_at"])
            .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))?;

        for workout in workouts {
            writer
                .write_record([
                    workout.id.to_string(),
                    workout.exercise,
                    workout.reps.to_string(),
                    workout.notes.unwrap_or_default(),
                    workout.recorded_at.to_rfc3339(),
                ])
                .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ApiError::Internal(anyhow::anyhow!(e.to_string())))?;

        String::from_utf8(bytes).map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))
    }
}

#[cfg(test)]
mod tests {
    // Database-backed flows are covered by the integration suite
}
