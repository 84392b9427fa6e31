//! Academic deadlines, kept sorted by due instant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::countdown::{Countdown, Urgency};
use crate::error::ValidationError;
use crate::storage::Persisted;

/// What kind of deadline this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeadlineKind {
    Exam,
    Assignment,
    Project,
    Other,
}

impl DeadlineKind {
    pub fn label(&self) -> &'static str {
        match self {
            DeadlineKind::Exam => "exam",
            DeadlineKind::Assignment => "assignment",
            DeadlineKind::Project => "project",
            DeadlineKind::Other => "other",
        }
    }
}

/// One deadline. Immutable once created except for deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deadline {
    pub id: String,
    pub subject: String,
    pub kind: DeadlineKind,
    pub due_at: DateTime<Utc>,
}

impl Deadline {
    /// Countdown to this deadline at an explicit "now".
    pub fn countdown_at(&self, now: DateTime<Utc>) -> Countdown {
        Countdown::between(self.due_at, now)
    }

    pub fn urgency_at(&self, now: DateTime<Utc>) -> Urgency {
        Urgency::of(&self.countdown_at(now))
    }
}

/// The deadline list, sorted ascending by due instant. Insertion keeps
/// the order; nothing else reorders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeadlineBook(Vec<Deadline>);

impl Persisted for DeadlineBook {
    const KEY: &'static str = "deadlines";
    const VERSION: u32 = 1;
}

impl DeadlineBook {
    /// Insert a deadline at its sort position.
    ///
    /// # Errors
    /// Rejects an empty subject.
    pub fn add(
        &mut self,
        subject: &str,
        kind: DeadlineKind,
        due_at: DateTime<Utc>,
    ) -> Result<&Deadline, ValidationError> {
        let subject = subject.trim();
        if subject.is_empty() {
            return Err(ValidationError::EmptyText { field: "subject" });
        }
        let index = self.0.partition_point(|d| d.due_at <= due_at);
        self.0.insert(
            index,
            Deadline {
                id: Uuid::new_v4().to_string(),
                subject: subject.to_string(),
                kind,
                due_at,
            },
        );
        Ok(&self.0[index])
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|d| d.id != id);
        self.0.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&Deadline> {
        self.0.iter().find(|d| d.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Deadline> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Deadline] {
        &self.0
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
    use chrono::TimeZone;

    fn due(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn inserts_keep_ascending_due_order() {
        let mut book = DeadlineBook::default();
        book.add("Algorithms", DeadlineKind::Exam, due(20)).unwrap();
        book.add("Compilers", DeadlineKind::Project, due(5)).unwrap();
        book.add("Databases", DeadlineKind::Assignment, due(12))
            .unwrap();

        let subjects: Vec<&str> = book.iter().map(|d| d.subject.as_str()).collect();
        assert_eq!(subjects, vec!["Compilers", "Databases", "Algorithms"]);
    }

    #[test]
    fn equal_due_instants_append_after_existing() {
        let mut book = DeadlineBook::default();
        book.add("first", DeadlineKind::Other, due(10)).unwrap();
        book.add("second", DeadlineKind::Other, due(10)).unwrap();
        assert_eq!(book.as_slice()[1].subject, "second");
    }

    #[test]
    fn empty_subject_is_rejected() {
        let mut book = DeadlineBook::default();
        assert!(book.add("  ", DeadlineKind::Exam, due(1)).is_err());
        assert!(book.is_empty());
    }

    #[test]
    fn remove_by_id() {
        let mut book = DeadlineBook::default();
        let id = book
            .add("Networks", DeadlineKind::Assignment, due(3))
            .unwrap()
            .id
            .clone();
        assert!(book.remove(&id));
        assert!(!book.remove(&id));
    }

    #[test]
    fn urgency_tracks_the_countdown() {
        let mut book = DeadlineBook::default();
        book.add("Soon", DeadlineKind::Exam, due(10)).unwrap();
        let deadline = &book.as_slice()[0];

        let now = Utc.with_ymd_and_hms(2025, 6, 9, 12, 0, 0).unwrap();
        assert_eq!(deadline.urgency_at(now), Urgency::Critical);
        assert_eq!(
            deadline.urgency_at(due(11)),
            Urgency::Past
        );
    }
}
