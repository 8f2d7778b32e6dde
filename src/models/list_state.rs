use thiserror::Error;

use super::item::Item;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("Index {index} out of range for list of {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

/// The ordered shopping list plus the edit cursor.
///
/// Insertion order is display order and bill line order. The cursor, when
/// set, always points at a valid index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListStore {
    items: Vec<Item>,
    edit_cursor: Option<usize>,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self {
            items,
            edit_cursor: None,
        }
    }

    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Overwrites the item at `index` and ends any edit session.
    pub fn replace_at(&mut self, index: usize, item: Item) -> Result<(), ListError> {
        self.check_index(index)?;
        self.items[index] = item;
        self.edit_cursor = None;
        Ok(())
    }

    /// Removes the item at `index`, keeping the cursor on the item it was
    /// pointing at (or clearing it if that item is the one removed).
    pub fn remove_at(&mut self, index: usize) -> Result<Item, ListError> {
        self.check_index(index)?;
        let removed = self.items.remove(index);
        self.edit_cursor = match self.edit_cursor {
            Some(cursor) if cursor == index => None,
            Some(cursor) if cursor > index => Some(cursor - 1),
            other => other,
        };
        Ok(removed)
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
        self.edit_cursor = None;
    }

    pub fn begin_edit(&mut self, index: usize) -> Result<(), ListError> {
        self.check_index(index)?;
        self.edit_cursor = Some(index);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.edit_cursor = None;
    }

    pub fn edit_cursor(&self) -> Option<usize> {
        self.edit_cursor
    }

    pub fn is_editing(&self) -> bool {
        self.edit_cursor.is_some()
    }

    pub fn editing(&self) -> Option<(usize, &Item)> {
        self.edit_cursor
            .and_then(|i| self.items.get(i).map(|item| (i, item)))
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.total).sum()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(ListError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}
