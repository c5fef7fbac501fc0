//! Overlays a user's in-progress selection on a generated slot grid.

use std::collections::BTreeSet;

use crate::models::time_slot::{SlotStatus, TimeSlot};

/// Marks every selected, non-disabled slot as `Selected`.
///
/// Disabled slots stay disabled with their reason even if their label is in
/// `selected`; the projection renders a selection, it never grants one.
pub fn project<S: AsRef<str>>(slots: &[TimeSlot], selected: &[S]) -> Vec<TimeSlot> {
    let selected: BTreeSet<&str> = selected.iter().map(AsRef::as_ref).collect();

    slots
        .iter()
        .map(|slot| {
            if slot.is_disabled() || !selected.contains(slot.label.as_str()) {
                return slot.clone();
            }
            TimeSlot {
                status: SlotStatus::Selected,
                reason: None,
                ..slot.clone()
            }
        })
        .collect()
}

/// Ordered set of labels a user has picked but not yet committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    labels: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `label` if absent, removes it if present.
    ///
    /// Returns `false` and leaves the selection untouched when `label` is not
    /// in `slots` or is disabled there.
    pub fn toggle(&mut self, slots: &[TimeSlot], label: &str) -> bool {
        let selectable = slots
            .iter()
            .any(|slot| slot.label == label && !slot.is_disabled());
        if !selectable {
            return false;
        }

        if let Some(index) = self.labels.iter().position(|l| l == label) {
            self.labels.remove(index);
        } else {
            self.labels.push(label.to_string());
        }
        true
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn clear(&mut self) {
        self.labels.clear();
    }

    /// Renders `slots` with this selection applied.
    pub fn project(&self, slots: &[TimeSlot]) -> Vec<TimeSlot> {
        project(slots, &self.labels)
    }
}
