//! API request and response types

use crate::consistency::{ConsistencyMetrics, ConsistencyPoint};
use crate::models::{Exercise, Level, Plan, ResourceCategory, Role};
use crate::streaks::StreakChange;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Authentication Types
// ============================================================================

/// Authentication tokens response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Password-reset issuance request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// Password-reset confirmation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetConfirmRequest {
    pub token: String,
    pub new_password: String,
}

/// User profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileResponse {
    pub id: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub level: Level,
    pub plan: Plan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Workout Types
// ============================================================================

/// Workout log entry request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogWorkoutRequest {
    pub exercise: Exercise,
    pub reps: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the workout happened (defaults to now)
    #[serde(default = "Utc::now")]
    pub recorded_at: DateTime<Utc>,
}

/// Workout log response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutResponse {
    pub id: String,
    pub exercise: Exercise,
    pub reps: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// Workout history query parameters
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorkoutHistoryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

impl WorkoutHistoryQuery {
    /// Clamp pagination parameters: limit defaults to 50, capped at 100.
    pub fn normalize(&self) -> (i64, i64) {
        let limit = self.limit.unwrap_or(50).clamp(1, 100);
        let offset = self.offset.unwrap_or(0).max(0);
        (limit, offset)
    }
}

/// Paginated workout history response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutHistoryResponse {
    pub items: Vec<WorkoutResponse>,
    pub total_count: i64,
    pub limit: i64,
    pub offset: i64,
    pub has_more: bool,
}

/// Aggregate workout statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutStatsResponse {
    pub total_workouts: i64,
    pub total_reps: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_exercise: Option<Exercise>,
    pub this_week: i64,
    pub this_month: i64,
}

// ============================================================================
// Mood Types
// ============================================================================

/// Mood log request, loosely linked to a workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogMoodRequest {
    pub workout_id: Uuid,
    pub score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default = "Utc::now")]
    pub recorded_at: DateTime<Utc>,
}

/// Mood log response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodResponse {
    pub id: String,
    pub workout_id: String,
    pub score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

// ============================================================================
// Consistency Types
// ============================================================================

/// Consistency window query parameters
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConsistencyQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
}

/// Consistency snapshot: chronological display points plus metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyResponse {
    pub points: Vec<ConsistencyPoint>,
    pub metrics: ConsistencyMetrics,
}

// ============================================================================
// Streak Types
// ============================================================================

/// Habit completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteStreakRequest {
    pub habit_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Streak record response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakResponse {
    pub id: String,
    pub habit_id: String,
    pub title: String,
    pub count: i32,
    pub last_completed_date: NaiveDate,
    /// Set when the response is the result of a completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<StreakChange>,
}

/// All streaks for a user plus aggregates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakOverviewResponse {
    pub streaks: Vec<StreakResponse>,
    pub active_count: usize,
    pub longest_streak: i32,
    pub total_streak_days: i64,
}

// ============================================================================
// Journal Types
// ============================================================================

/// Create journal entry request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJournalEntryRequest {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_id: Option<Uuid>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Update journal entry request; absent fields are left unchanged
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateJournalEntryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Journal entry response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntryResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_id: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Resource Types
// ============================================================================

/// Catalog resource response; `locked` resources have link and content
/// withheld server-side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ResourceCategory,
    pub premium: bool,
    pub locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create resource request (admin)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResourceRequest {
    pub title: String,
    pub description: String,
    pub category: ResourceCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub premium: bool,
}

/// Update resource request (admin); absent fields are left unchanged
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ResourceCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium: Option<bool>,
}

// ============================================================================
// Premium Types
// ============================================================================

/// Billing period for an upgrade
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BillingPeriod {
    Monthly,
    Yearly,
}

/// Plan upgrade request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeRequest {
    pub period: BillingPeriod,
}

/// Premium subscription status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PremiumStatusResponse {
    pub plan: Plan,
    pub is_premium: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_expiry: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_query_normalize_defaults() {
        let query = WorkoutHistoryQuery::default();
        assert_eq!(query.normalize(), (50, 0));
    }

    #[test]
    fn test_history_query_normalize_caps_limit() {
        let query = WorkoutHistoryQuery {
            limit: Some(5000),
            offset: Some(-3),
        };
        assert_eq!(query.normalize(), (100, 0));
    }

    #[test]
    fn test_log_workout_request_defaults_timestamp() {
        let json = r#"{"exercise":"squats","reps":20}"#;
        let req: LogWorkoutRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.exercise, Exercise::Squats);
        assert_eq!(req.reps, 20);
    }

    #[test]
    fn test_billing_period_wire_format() {
        let req: UpgradeRequest = serde_json::from_str(r#"{"period":"yearly"}"#).unwrap();
        assert_eq!(req.period, BillingPeriod::Yearly);
    }
}
