//! # Dayboard Core Library
//!
//! Core business logic for Dayboard, a personal productivity dashboard.
//! All operations are available through a standalone CLI binary; any GUI
//! would be a thin layer over this same library.
//!
//! ## Architecture
//!
//! - **Countdown Engine**: wall-clock decomposition of time remaining to a
//!   target instant, driven by a caller-owned tick
//! - **Streak Engine**: consecutive-day streaks recomputed fresh from a
//!   completion log
//! - **Health Metrics**: BMI banding and goal progress derived from a
//!   weight series
//! - **Storage**: one versioned JSON blob per collection plus TOML-based
//!   configuration
//! - **AI collaborators**: trait seams for the calorie estimator and the
//!   next-match lookup
//!
//! ## Key Components
//!
//! - [`CountdownEngine`]: caller-ticked countdown state
//! - [`CompletionLog`]: completion dates and streak math
//! - [`HealthProfile`]: weight history and derived metrics
//! - [`KvStore`]: persisted-value store with schema versioning
//! - [`Config`]: application configuration management

pub mod ai;
pub mod board;
pub mod countdown;
pub mod error;
pub mod health;
pub mod storage;
pub mod streak;

pub use ai::{
    AiMatchProvider, CalorieEstimator, FixtureMatchProvider, GenerativeClient, ImagePayload,
    MatchProvider, MealEstimate, UpcomingMatch, VisionCalorieEstimator,
};
pub use board::{
    AcademicTasks, Checklist, ChecklistItem, Day, Deadline, DeadlineBook, DeadlineKind, Goals,
    Habit, Habits, PlannerEntry, WeeklyPlan,
};
pub use countdown::{parse_instant, Countdown, CountdownEngine, Urgency};
pub use error::{AiError, ConfigError, CoreError, StoreError, ValidationError};
pub use health::{BmiCategory, HealthProfile, WeightEntry};
pub use storage::{Config, KvStore, Persisted};
pub use streak::{CompletionLog, FlameLevel, StreakStatus};
