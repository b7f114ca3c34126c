//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories, the cache, and the shared domain computations.

pub mod consistency;
pub mod export;
pub mod journal;
pub mod mood;
pub mod premium;
pub mod resource;
pub mod streak;
pub mod user;
pub mod workout;

pub use consistency::ConsistencyService;
pub use export::ExportService;
pub use journal::JournalService;
pub use mood::MoodService;
pub use premium::PremiumService;
pub use resource::ResourceService;
pub use streak::StreakService;
pub use user::UserService;
pub use workout::WorkoutService;
