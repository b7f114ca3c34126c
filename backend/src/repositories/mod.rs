//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod journal;
pub mod mood;
pub mod password_reset;
pub mod resource;
pub mod streak;
pub mod user;
pub mod workout;

pub use journal::{CreateJournalEntry, JournalRepository, UpdateJournalEntry};
pub use mood::{CreateMood, MoodRepository};
pub use password_reset::PasswordResetRepository;
pub use resource::{CreateResource, ResourceRepository, UpdateResource};
pub use streak::StreakRepository;
pub use user::UserRepository;
pub use workout::{CreateWorkout, WorkoutRepository};
