//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! `FfiTodoStore` is opaque to C. Everything else is plain data: C strings
//! instead of `String`, raw pointer + length instead of `Vec`, and enums with
//! explicit discriminants. Constructors for the result envelope live here to
//! keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use todo_core::{Todo, TodoError, TodoStore};

/// Opaque handle owning one `TodoStore`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiTodoStore {
    pub(crate) inner: TodoStore,
}

/// Error codes returned in `FfiTodoResult`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    TodoNotFound = 1,
    TodoNotFoundOnPage = 2,
    InvalidArg = 3,
    Panic = 4,
    NullArg = 5,
}

/// Tag that tells `todo_free_result` what `FfiTodoResult::data` points to.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiDataTag {
    None = 0,
    TodoList = 1,
}

/// A single todo item exposed to C.
#[repr(C)]
pub struct FfiTodo {
    pub id: u64,
    pub title: *mut c_char,
    pub completed: bool,
}

/// A page of todo items exposed to C.
#[repr(C)]
pub struct FfiTodoList {
    pub items: *mut FfiTodo,
    pub len: u32,
}

/// Result envelope for every store operation.
///
/// On success `error_code` is `Ok` and `error_message` is null. `id` holds
/// the new id after a create; `data` points to an `FfiTodoList` after a read.
/// On failure `error_message` is a human-readable C string and `id` / `page`
/// carry the number the store rejected.
#[repr(C)]
pub struct FfiTodoResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub id: u64,
    pub page: u64,
    pub data_tag: FfiDataTag,
    pub data: *mut std::ffi::c_void,
}

/// Move `s` into a heap C string. Interior NULs are dropped.
pub(crate) fn into_c_string(s: String) -> *mut c_char {
    CString::new(s)
        .unwrap_or_else(|err| {
            let mut bytes = err.into_vec();
            bytes.retain(|&b| b != 0);
            CString::new(bytes).unwrap_or_default()
        })
        .into_raw()
}

impl FfiTodoResult {
    fn boxed(error_code: FfiErrorCode, error_message: Option<String>) -> Box<Self> {
        Box::new(FfiTodoResult {
            error_code,
            error_message: error_message.map_or(std::ptr::null_mut(), into_c_string),
            id: 0,
            page: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        })
    }

    /// Success with no payload (update, delete).
    pub(crate) fn ok_empty() -> *mut Self {
        Box::into_raw(Self::boxed(FfiErrorCode::Ok, None))
    }

    /// Success carrying the id of a created todo.
    pub(crate) fn ok_id(id: u64) -> *mut Self {
        let mut result = Self::boxed(FfiErrorCode::Ok, None);
        result.id = id;
        Box::into_raw(result)
    }

    /// Success carrying a page of todos.
    pub(crate) fn ok_todo_list(todos: Vec<Todo>) -> *mut Self {
        let len = todos.len() as u32;
        let ffi_todos: Box<[FfiTodo]> = todos
            .into_iter()
            .map(|t| FfiTodo {
                id: t.id,
                title: into_c_string(t.title),
                completed: t.completed,
            })
            .collect();

        // Freed with `Box::from_raw` over a slice of `len` items.
        let items = if ffi_todos.is_empty() {
            std::ptr::null_mut()
        } else {
            Box::into_raw(ffi_todos) as *mut FfiTodo
        };

        let mut result = Self::boxed(FfiErrorCode::Ok, None);
        result.data_tag = FfiDataTag::TodoList;
        result.data = Box::into_raw(Box::new(FfiTodoList { items, len })) as *mut std::ffi::c_void;
        Box::into_raw(result)
    }

    pub(crate) fn from_error(err: TodoError) -> *mut Self {
        let message = Some(err.to_string());
        let result = match err {
            TodoError::TodoNotFound(id) => {
                let mut result = Self::boxed(FfiErrorCode::TodoNotFound, message);
                result.id = id;
                result
            }
            TodoError::TodoNotFoundOnPage(page) => {
                let mut result = Self::boxed(FfiErrorCode::TodoNotFoundOnPage, message);
                result.page = page;
                result
            }
        };
        Box::into_raw(result)
    }

    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Box::into_raw(Self::boxed(
            FfiErrorCode::NullArg,
            Some(format!("null argument: {name}")),
        ))
    }

    pub(crate) fn invalid_arg(msg: &str) -> *mut Self {
        Box::into_raw(Self::boxed(FfiErrorCode::InvalidArg, Some(msg.to_string())))
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        Box::into_raw(Self::boxed(FfiErrorCode::Panic, Some(msg.to_string())))
    }
}
