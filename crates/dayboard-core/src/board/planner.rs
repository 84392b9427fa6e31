//! Weekly planner: one ordered task list per day of the week.

use std::collections::BTreeMap;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::storage::Persisted;

/// Day of week, Sunday-first (the planner's display order).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Day::Sunday => "sunday",
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
        }
    }

    pub fn from_weekday(weekday: Weekday) -> Day {
        match weekday {
            Weekday::Sun => Day::Sunday,
            Weekday::Mon => Day::Monday,
            Weekday::Tue => Day::Tuesday,
            Weekday::Wed => Day::Wednesday,
            Weekday::Thu => Day::Thursday,
            Weekday::Fri => Day::Friday,
            Weekday::Sat => Day::Saturday,
        }
    }

    /// Case-insensitive parse of a full day name.
    pub fn parse(raw: &str) -> Option<Day> {
        let lower = raw.trim().to_lowercase();
        Day::ALL.into_iter().find(|day| day.label() == lower)
    }
}

/// One planner entry. Deleted, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerEntry {
    pub id: String,
    pub text: String,
}

/// The week's plan.
///
/// Envelope VERSION 2: version 1 keyed days by localized display names,
/// which have no mechanical upgrade; old blobs fall back to the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyPlan(BTreeMap<Day, Vec<PlannerEntry>>);

impl Default for WeeklyPlan {
    fn default() -> Self {
        Self(Day::ALL.into_iter().map(|day| (day, Vec::new())).collect())
    }
}

impl Persisted for WeeklyPlan {
    const KEY: &'static str = "weekly_plan";
    const VERSION: u32 = 2;
}

impl WeeklyPlan {
    /// Append an entry to a day's list.
    ///
    /// # Errors
    /// Rejects empty or whitespace-only text.
    pub fn add(&mut self, day: Day, text: &str) -> Result<&PlannerEntry, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText { field: "text" });
        }
        let entries = self.0.entry(day).or_default();
        entries.push(PlannerEntry {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
        });
        Ok(&entries[entries.len() - 1])
    }

    pub fn remove(&mut self, day: Day, id: &str) -> bool {
        let Some(entries) = self.0.get_mut(&day) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        entries.len() != before
    }

    pub fn entries(&self, day: Day) -> &[PlannerEntry] {
        self.0.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Days in Sunday-first order with their entries.
    pub fn days(&self) -> impl Iterator<Item = (Day, &[PlannerEntry])> {
        Day::ALL
            .into_iter()
            .map(move |day| (day, self.entries(day)))
    }

    pub fn total_entries(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_has_all_seven_days_empty() {
        let plan = WeeklyPlan::default();
        assert_eq!(plan.days().count(), 7);
        assert_eq!(plan.total_entries(), 0);
    }

    #[test]
    fn add_appends_in_order() {
        let mut plan = WeeklyPlan::default();
        plan.add(Day::Monday, "standup").unwrap();
        plan.add(Day::Monday, "review").unwrap();

        let texts: Vec<&str> = plan
            .entries(Day::Monday)
            .iter()
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(texts, vec!["standup", "review"]);
        assert!(plan.entries(Day::Tuesday).is_empty());
    }

    #[test]
    fn remove_targets_one_day() {
        let mut plan = WeeklyPlan::default();
        let id = plan.add(Day::Friday, "groceries").unwrap().id.clone();
        assert!(!plan.remove(Day::Saturday, &id));
        assert!(plan.remove(Day::Friday, &id));
        assert_eq!(plan.total_entries(), 0);
    }

    #[test]
    fn empty_text_is_rejected() {
        let mut plan = WeeklyPlan::default();
        assert!(plan.add(Day::Sunday, " ").is_err());
    }

    #[test]
    fn day_parse_is_case_insensitive() {
        assert_eq!(Day::parse("Wednesday"), Some(Day::Wednesday));
        assert_eq!(Day::parse("SUNDAY"), Some(Day::Sunday));
        assert_eq!(Day::parse("wed"), None);
    }

    #[test]
    fn plan_round_trips_through_json() {
        let mut plan = WeeklyPlan::default();
        plan.add(Day::Thursday, "call home").unwrap();
        let json = serde_json::to_string(&plan).unwrap();
        let back: WeeklyPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
