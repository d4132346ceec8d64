//! Reading plans.
//!
//! A plan is an ordered list of chapter assignments with per-assignment
//! completion state, persisted alongside the other reader records.

use serde::{Deserialize, Serialize};

use crate::books;
use crate::error::StorageError;
use crate::storage::{keys, load_or_default, save, Storage};

/// One chapter assignment within a plan.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// 1-based book number.
    pub book: u32,
    /// Chapter number within the book.
    pub chapter: u32,
}

/// A reading plan with per-reading completion state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingPlan {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    readings: Vec<Reading>,
    #[serde(default)]
    completed: Vec<bool>,
}

impl ReadingPlan {
    /// Create a plan with nothing read yet.
    pub fn new(id: impl Into<String>, name: impl Into<String>, readings: Vec<Reading>) -> Self {
        let completed = vec![false; readings.len()];
        Self {
            id: id.into(),
            name: name.into(),
            readings,
            completed,
        }
    }

    /// Plan covering every chapter of one book, in order.
    pub fn through_book(book: u32) -> Option<Self> {
        let name = books::book_name(book)?;
        let chapters = books::chapter_count(book)?;
        let readings = (1..=chapters).map(|chapter| Reading { book, chapter }).collect();
        Some(Self::new(format!("book-{book}"), name, readings))
    }

    /// Assignments, in plan order.
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// True when the plan has no assignments.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Mark one assignment done. False when the index is out of range.
    pub fn mark_read(&mut self, index: usize) -> bool {
        if index >= self.readings.len() {
            return false;
        }
        self.align_completed();
        self.completed[index] = true;
        true
    }

    /// Whether one assignment has been read.
    pub fn is_read(&self, index: usize) -> bool {
        self.completed.get(index).copied().unwrap_or(false)
    }

    /// (completed, total) assignment counts.
    pub fn progress(&self) -> (usize, usize) {
        let done = self
            .completed
            .iter()
            .take(self.readings.len())
            .filter(|&&c| c)
            .count();
        (done, self.readings.len())
    }

    /// True when every assignment has been read.
    pub fn is_complete(&self) -> bool {
        let (done, total) = self.progress();
        done == total
    }

    /// First unread assignment, with its index.
    pub fn next_unread(&self) -> Option<(usize, &Reading)> {
        self.readings
            .iter()
            .enumerate()
            .find(|(index, _)| !self.is_read(*index))
    }

    // Persisted state may predate edits to the plan; completion is realigned
    // to the assignment list before writes.
    fn align_completed(&mut self) {
        if self.completed.len() != self.readings.len() {
            self.completed.resize(self.readings.len(), false);
        }
    }
}

/// The persisted set of plans.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plans {
    plans: Vec<ReadingPlan>,
}

impl Plans {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// All plans.
    pub fn plans(&self) -> &[ReadingPlan] {
        &self.plans
    }

    /// Find a plan by id.
    pub fn get(&self, id: &str) -> Option<&ReadingPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    /// Mutable access to a plan by id.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut ReadingPlan> {
        self.plans.iter_mut().find(|p| p.id == id)
    }

    /// Insert a plan, replacing any existing plan with the same id.
    pub fn upsert(&mut self, plan: ReadingPlan) {
        if let Some(existing) = self.plans.iter_mut().find(|p| p.id == plan.id) {
            *existing = plan;
        } else {
            self.plans.push(plan);
        }
    }

    /// Remove a plan by id. False when no such plan exists.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.plans.len();
        self.plans.retain(|p| p.id != id);
        self.plans.len() != before
    }

    /// Load plans, falling back to empty on absent or malformed data.
    pub fn load(store: &dyn Storage) -> Self {
        load_or_default(store, keys::PLANS)
    }

    /// Persist this set.
    pub fn save(&self, store: &mut dyn Storage) -> Result<(), StorageError> {
        save(store, keys::PLANS, self)
    }
}
