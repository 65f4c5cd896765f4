//! Domain types and request payloads.
//!
//! # Design
//! `Todo` is both the stored record and what `read_todos` hands back. The
//! payload types describe the HTTP bodies shared by `todo-server` and
//! `TodoClient`, so the two sides cannot drift apart.

use serde::{Deserialize, Serialize};

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Response payload for a created todo.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedTodo {
    pub id: u64,
}

/// Request payload for updating an existing todo. `title` always replaces
/// the stored title; `completed` is applied only when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}
