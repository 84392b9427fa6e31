//! Habit list over completion logs.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::storage::Persisted;
use crate::streak::{CompletionLog, StreakStatus};

/// One tracked habit. Streak state is derived from the log on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub log: CompletionLog,
}

impl Habit {
    pub fn status(&self, today: NaiveDate) -> StreakStatus {
        self.log.status(today)
    }
}

/// The habit collection.
///
/// Envelope VERSION 2: version 1 stored a cached streak counter and a
/// single last-completed instant per habit; the upgrade reconstructs the
/// completion-date set those values imply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Habits(Vec<Habit>);

impl Persisted for Habits {
    const KEY: &'static str = "habits";
    const VERSION: u32 = 2;

    fn migrate(from: u32, raw: serde_json::Value) -> Option<serde_json::Value> {
        if from != 1 {
            return None;
        }

        #[derive(Deserialize)]
        struct HabitV1 {
            id: String,
            name: String,
            #[serde(default)]
            streak: u32,
            #[serde(default, rename = "lastCompleted")]
            last_completed: Option<DateTime<Utc>>,
        }

        let old: Vec<HabitV1> = serde_json::from_value(raw).ok()?;
        let upgraded: Vec<Habit> = old
            .into_iter()
            .map(|habit| {
                let mut log = CompletionLog::new();
                if let Some(last) = habit.last_completed {
                    let last_day = last.date_naive();
                    // A set lastCompleted means at least that day was done.
                    for back in 0..habit.streak.max(1) {
                        if let Some(day) = last_day.checked_sub_days(Days::new(back as u64)) {
                            log.insert(day);
                        }
                    }
                }
                Habit {
                    id: habit.id,
                    name: habit.name,
                    log,
                }
            })
            .collect();
        serde_json::to_value(upgraded).ok()
    }
}

impl Habits {
    /// # Errors
    /// Rejects an empty name.
    pub fn add(&mut self, name: &str) -> Result<&Habit, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyText { field: "name" });
        }
        let index = self.0.len();
        self.0.push(Habit {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            log: CompletionLog::new(),
        });
        Ok(&self.0[index])
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|habit| habit.id != id);
        self.0.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.0.iter().find(|habit| habit.id == id)
    }

    /// Toggle today's completion for one habit and return its fresh
    /// status, or `None` when the id is unknown.
    pub fn toggle_today(&mut self, id: &str, today: NaiveDate) -> Option<StreakStatus> {
        let habit = self.0.iter_mut().find(|habit| habit.id == id)?;
        habit.log.toggle(today);
        Some(habit.log.status(today))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Habit> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn add_toggle_and_recompute() {
        let mut habits = Habits::default();
        let id = habits.add("gym").unwrap().id.clone();

        let status = habits.toggle_today(&id, today()).unwrap();
        assert_eq!(status.streak, 1);
        assert!(status.completed_today);

        let undone = habits.toggle_today(&id, today()).unwrap();
        assert_eq!(undone.streak, 0);
        assert!(!undone.completed_today);

        assert!(habits.toggle_today("missing", today()).is_none());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut habits = Habits::default();
        assert!(habits.add("").is_err());
        assert!(habits.is_empty());
    }

    #[test]
    fn v1_blob_upgrades_to_completion_dates() {
        let v1 = serde_json::json!([
            {"id": "gym", "name": "Gym", "streak": 3, "lastCompleted": "2025-03-09T18:30:00Z"},
            {"id": "read", "name": "Read", "streak": 0, "lastCompleted": null}
        ]);

        let raw = Habits::migrate(1, v1).unwrap();
        let habits: Habits = serde_json::from_value(raw).unwrap();

        let gym = habits.get("gym").unwrap();
        assert_eq!(gym.log.len(), 3);
        // Run ends the day of lastCompleted: Mar 7, 8, 9.
        let days: Vec<NaiveDate> = gym.log.iter().collect();
        assert_eq!(days[0], today() - Duration::days(3));
        assert_eq!(days[2], today() - Duration::days(1));

        let read = habits.get("read").unwrap();
        assert!(read.log.is_empty());
    }

    #[test]
    fn migrate_only_handles_version_1() {
        assert!(Habits::migrate(3, serde_json::json!([])).is_none());
    }
}
