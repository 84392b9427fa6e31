//! Entity collections behind the dashboard widgets.
//!
//! Each collection is owned exclusively by its widget and persisted under
//! its own store key; there are no cross-collection references. Input
//! validation happens here, before any engine sees a value.

mod checklist;
mod deadlines;
mod habits;
mod planner;

pub use checklist::{AcademicTasks, Checklist, ChecklistItem, Goals};
pub use deadlines::{Deadline, DeadlineBook, DeadlineKind};
pub use habits::{Habit, Habits};
pub use planner::{Day, PlannerEntry, WeeklyPlan};
