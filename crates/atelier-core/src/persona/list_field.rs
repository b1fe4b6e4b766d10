//! Generic ordered-collection controller for draft sub-entity lists.
//!
//! The draft owns two independent collections with different mutation
//! contracts: document-set references are toggled by identifier equality and
//! never contain duplicates, while starter messages are appended and removed
//! strictly by position and may contain duplicate content.

use serde::{Deserialize, Serialize};

/// An ordered collection owned by the draft.
///
/// Items keep insertion order; nothing is ever sorted or reordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ListField<T> {
    items: Vec<T>,
}

impl<T> Default for ListField<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> ListField<T> {
    /// Creates an empty list field.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item at the end of the collection.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes the item at `index`, shifting later items down.
    ///
    /// Out-of-range indices are a no-op and return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: PartialEq> ListField<T> {
    /// Appends `item` at the end if absent, otherwise removes the existing
    /// occurrence. Uses item equality, not positional equality.
    ///
    /// Invariant: a collection mutated only through `toggle` never contains
    /// duplicates.
    pub fn toggle(&mut self, item: T) {
        match self.items.iter().position(|existing| *existing == item) {
            Some(index) => {
                self.items.remove(index);
            }
            None => self.items.push(item),
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T> From<Vec<T>> for ListField<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}
