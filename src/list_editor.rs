//! In-memory list editing with a single active edit
//!
//! Items are addressed by [`ItemId`]. Index-based helpers resolve the index to
//! an id first, so an edit in progress can never be redirected to a different
//! item by a delete that shifts positions.

use tracing::debug;

use crate::models::{Item, ItemId};

/// Which item, if any, is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing(ItemId),
}

#[derive(Debug, Clone)]
pub struct ListEditor {
    items: Vec<Item>,
    edit_state: EditState,
    input: String,
    next_id: u64,
}

impl Default for ListEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ListEditor {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            edit_state: EditState::Idle,
            input: String::new(),
            next_id: 1,
        }
    }

    fn get_next_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a new item
    ///
    /// Blank or whitespace-only text is rejected and nothing changes.
    /// On success the input buffer is cleared.
    pub fn add(&mut self, text: &str) -> Option<ItemId> {
        if text.trim().is_empty() {
            debug!("Ignoring blank item");
            return None;
        }

        let id = self.get_next_id();
        self.items.push(Item::new(id, text));
        self.input.clear();
        debug!("Added item {} at position {}", id, self.items.len() - 1);
        Some(id)
    }

    /// Begin editing an item, copying its text into the input buffer
    ///
    /// Returns false (and leaves state unchanged) if the id is unknown.
    pub fn start_edit(&mut self, id: ItemId) -> bool {
        let Some(item) = self.get(id) else {
            debug!("Cannot edit unknown item {}", id);
            return false;
        };
        self.input = item.text.clone();
        self.edit_state = EditState::Editing(id);
        debug!("Editing item {}", id);
        true
    }

    pub fn start_edit_at(&mut self, index: usize) -> bool {
        match self.id_at(index) {
            Some(id) => self.start_edit(id),
            None => false,
        }
    }

    /// Overwrite the item being edited and return to idle
    ///
    /// Requires an active edit and non-blank text. If the edited item has
    /// disappeared the edit is dropped and false is returned.
    pub fn commit_edit(&mut self, text: &str) -> bool {
        let EditState::Editing(id) = self.edit_state else {
            return false;
        };
        if text.trim().is_empty() {
            debug!("Ignoring blank edit for item {}", id);
            return false;
        }

        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.text = text.to_string();
                self.cancel_edit();
                debug!("Committed edit to item {}", id);
                true
            }
            None => {
                // Stale edit; recover by going back to idle
                self.cancel_edit();
                false
            }
        }
    }

    /// Remove an item
    ///
    /// Deleting the item under edit cancels the edit.
    pub fn delete(&mut self, id: ItemId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.items.remove(index);
        if self.edit_state == EditState::Editing(id) {
            self.cancel_edit();
        }
        debug!("Deleted item {} from position {}", id, index);
        true
    }

    pub fn delete_at(&mut self, index: usize) -> bool {
        match self.id_at(index) {
            Some(id) => self.delete(id),
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit_state = EditState::Idle;
        self.input.clear();
    }

    /// Drop every item and any edit in progress
    pub fn clear(&mut self) {
        self.items.clear();
        self.cancel_edit();
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn id_at(&self, index: usize) -> Option<ItemId> {
        self.items.get(index).map(|item| item.id)
    }

    pub fn edit_state(&self) -> EditState {
        self.edit_state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.edit_state, EditState::Editing(_))
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }
}
