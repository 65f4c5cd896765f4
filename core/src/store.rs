//! In-memory todo store.
//!
//! # Design
//! Records live in a `BTreeMap` keyed by id. Ids come from a counter that only
//! moves forward and are never reused, so ascending key order is insertion
//! order and pagination can walk the map directly.
//!
//! Queries take `&self` and mutations `&mut self`; whoever owns the store
//! (the server's lock, the FFI handle) serializes calls, which makes every
//! operation atomic with respect to the others.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::TodoError;
use crate::types::Todo;

/// The first id handed out by a fresh store.
pub const FIRST_ID: u64 = 1;

/// Owns every todo and the id sequence.
#[derive(Debug, Clone)]
pub struct TodoStore {
    records: BTreeMap<u64, Todo>,
    next_id: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: FIRST_ID,
        }
    }

    /// Insert a new, not yet completed todo and return its id.
    pub fn create_todo(&mut self, title: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.records.insert(
            id,
            Todo {
                id,
                title,
                completed: false,
            },
        );
        debug!(id, "created todo");
        id
    }

    /// Remove `id` if present. Deleting a missing id is not an error.
    pub fn delete_todo(&mut self, id: u64) {
        if self.records.remove(&id).is_some() {
            debug!(id, "deleted todo");
        }
    }

    /// Return the zero-indexed `page` of `page_size` todos, in id order.
    ///
    /// The last page may be short. A page that starts at or past the end of
    /// the collection, a zero `page_size`, or a start offset that overflows
    /// `u64` yields `TodoNotFoundOnPage(page)`.
    pub fn read_todos(&self, page: u64, page_size: u64) -> Result<Vec<Todo>, TodoError> {
        let start = page
            .checked_mul(page_size)
            .and_then(|start| usize::try_from(start).ok())
            .filter(|&start| page_size > 0 && start < self.records.len());

        let Some(start) = start else {
            debug!(page, page_size, "no todos found on page");
            return Err(TodoError::TodoNotFoundOnPage(page));
        };

        let take = usize::try_from(page_size).unwrap_or(usize::MAX);
        Ok(self
            .records
            .values()
            .skip(start)
            .take(take)
            .cloned()
            .collect())
    }

    /// Replace the title of `id` and, when given, its completion flag.
    pub fn update_todo(
        &mut self,
        id: u64,
        title: String,
        completed: Option<bool>,
    ) -> Result<(), TodoError> {
        let Some(todo) = self.records.get_mut(&id) else {
            debug!(id, "update of missing todo");
            return Err(TodoError::TodoNotFound(id));
        };
        todo.title = title;
        if let Some(completed) = completed {
            todo.completed = completed;
        }
        debug!(id, completed = todo.completed, "updated todo");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
