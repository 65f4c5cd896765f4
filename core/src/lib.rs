//! Todo store engine and the types shared by its transports.
//!
//! # Overview
//! `TodoStore` owns every todo and the id sequence, and implements the four
//! operations: create, paginated read, update and delete. Transports
//! (`todo-server`, `todo-ffi`) own one store each and relay its results.
//!
//! # Design
//! - Ids are assigned by the store from a monotonic counter, never reused.
//! - Pages are zero-indexed slices in id order; an empty slice is an error.
//! - `TodoError` has exactly two cases and is serializable, so transports
//!   pass it through untouched.
//! - `TodoClient` is a stateless host-does-IO client for the HTTP transport.

pub mod client;
pub mod error;
pub mod http;
pub mod store;
pub mod types;

pub use client::TodoClient;
pub use error::{ApiError, TodoError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::TodoStore;
pub use types::{CreateTodo, CreatedTodo, Todo, UpdateTodo};
