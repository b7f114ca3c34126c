//! FitLikeUs Shared Library
//!
//! This crate contains the domain models, API types, validation rules, and
//! the pure consistency/streak computations used by the backend and the
//! WASM module.

pub mod consistency;
pub mod errors;
pub mod models;
pub mod streaks;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use types::*;

// Export domain models
pub use models::{
    Exercise, JournalEntry, Level, Mood, Plan, Resource, ResourceCategory, Role, Streak,
    UserProfile, Workout,
};
