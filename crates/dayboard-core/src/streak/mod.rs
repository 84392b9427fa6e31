//! Consecutive-day streak computation over a completion log.
//!
//! The log is the source of truth; streak and completed-today are always
//! recomputed fresh from it. No cached counter exists anywhere, so the
//! derived values can never desync from history after an edit.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Set of calendar days on which a habit was marked complete.
///
/// Time-of-day is irrelevant to streak math; the set representation makes
/// same-day duplicates structurally impossible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionLog {
    dates: BTreeSet<NaiveDate>,
}

/// Derived streak state for one log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakStatus {
    /// Length of the unbroken consecutive-day run ending today or
    /// yesterday. Zero once the streak has lapsed.
    pub streak: u32,
    pub completed_today: bool,
}

impl CompletionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    pub fn remove(&mut self, date: NaiveDate) -> bool {
        self.dates.remove(&date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    /// Toggle today's completion: add if absent, remove if present (undo).
    /// Returns whether today is completed afterwards. Toggling twice
    /// returns the log to its original state.
    pub fn toggle(&mut self, today: NaiveDate) -> bool {
        if self.dates.remove(&today) {
            false
        } else {
            self.dates.insert(today);
            true
        }
    }

    /// Compute the current streak relative to `today`.
    ///
    /// The streak lapses (drops to zero) when the most recent completion
    /// is neither today nor yesterday; old activity earns no credit.
    /// Evaluation is lazy -- the lapse is only observed when someone asks.
    pub fn status(&self, today: NaiveDate) -> StreakStatus {
        let mut recent = self.dates.iter().rev().copied();
        let Some(latest) = recent.next() else {
            return StreakStatus {
                streak: 0,
                completed_today: false,
            };
        };

        let completed_today = latest == today;
        if !completed_today && Some(latest) != today.pred_opt() {
            return StreakStatus {
                streak: 0,
                completed_today: false,
            };
        }

        let mut streak = 1u32;
        let mut cursor = latest;
        for date in recent {
            if (cursor - date).num_days() == 1 {
                streak += 1;
                cursor = date;
            } else {
                break;
            }
        }

        StreakStatus {
            streak,
            completed_today,
        }
    }
}

/// Display-only flame tier for a streak. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlameLevel {
    /// Not completed today.
    Unlit,
    /// Completed today, streak under a week.
    Kindling,
    /// 7 days or more.
    Ember,
    /// 14 days or more.
    Blaze,
    /// 30 days or more.
    Inferno,
}

impl FlameLevel {
    pub fn for_status(status: &StreakStatus) -> FlameLevel {
        if !status.completed_today {
            return FlameLevel::Unlit;
        }
        match status.streak {
            s if s >= 30 => FlameLevel::Inferno,
            s if s >= 14 => FlameLevel::Blaze,
            s if s >= 7 => FlameLevel::Ember,
            _ => FlameLevel::Kindling,
        }
    }
}
