//! Toggle/delete checklists (academic tasks, goals).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::storage::Persisted;

/// One checklist entry. No derived state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// An ordered list of checklist items, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checklist {
    items: Vec<ChecklistItem>,
}

impl Checklist {
    /// Add a new item at the front of the list.
    ///
    /// # Errors
    /// Rejects empty or whitespace-only text.
    pub fn add(&mut self, text: &str) -> Result<&ChecklistItem, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText { field: "text" });
        }
        self.items.insert(
            0,
            ChecklistItem {
                id: Uuid::new_v4().to_string(),
                text: text.to_string(),
                completed: false,
            },
        );
        Ok(&self.items[0])
    }

    /// Flip an item's completed flag. Returns the item, or `None` when
    /// the id is unknown.
    pub fn toggle(&mut self, id: &str) -> Option<&ChecklistItem> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.completed = !item.completed;
        Some(item)
    }

    /// Remove an item by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// The academic-tasks collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AcademicTasks(pub Checklist);

impl Persisted for AcademicTasks {
    const KEY: &'static str = "academic_tasks";
    const VERSION: u32 = 1;
}

/// The goals collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Goals(pub Checklist);

impl Persisted for Goals {
    const KEY: &'static str = "goals";
    const VERSION: u32 = 1;
}

impl std::ops::Deref for AcademicTasks {
    type Target = Checklist;
    fn deref(&self) -> &Checklist {
        &self.0
    }
}

impl std::ops::DerefMut for AcademicTasks {
    fn deref_mut(&mut self) -> &mut Checklist {
        &mut self.0
    }
}

impl std::ops::Deref for Goals {
    type Target = Checklist;
    fn deref(&self) -> &Checklist {
        &self.0
    }
}

impl std::ops::DerefMut for Goals {
    fn deref_mut(&mut self) -> &mut Checklist {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_prepends_and_validates() {
        let mut list = Checklist::default();
        list.add("first").unwrap();
        list.add("second").unwrap();
        assert_eq!(list.items()[0].text, "second");
        assert_eq!(list.items()[1].text, "first");

        assert!(matches!(
            list.add("   "),
            Err(ValidationError::EmptyText { .. })
        ));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn toggle_flips_and_reports_unknown_ids() {
        let mut list = Checklist::default();
        let id = list.add("study").unwrap().id.clone();

        assert!(list.toggle(&id).unwrap().completed);
        assert!(!list.toggle(&id).unwrap().completed);
        assert!(list.toggle("nope").is_none());
    }

    #[test]
    fn remove_by_id() {
        let mut list = Checklist::default();
        let id = list.add("drop me").unwrap().id.clone();
        assert!(list.remove(&id));
        assert!(!list.remove(&id));
        assert!(list.is_empty());
    }

    #[test]
    fn items_keep_trimmed_text() {
        let mut list = Checklist::default();
        list.add("  padded  ").unwrap();
        assert_eq!(list.items()[0].text, "padded");
    }
}
