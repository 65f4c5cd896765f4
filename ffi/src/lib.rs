//! C ABI over a `todo-core` store.
//!
//! # Overview
//! A C caller creates a store handle, runs the four store operations against
//! it, and frees the handle when done. No async runtime, no serde, no HTTP.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Every operation returns an `FfiTodoResult` envelope; store errors keep
//!   their kind and the rejected number.
//! - The handle is not synchronized. Callers serialize access to one handle,
//!   which keeps each operation atomic.
//! - The C caller owns all returned pointers and must call the matching
//!   `todo_*_free` / `todo_free_result` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use todo_core::TodoStore;

use types::*;

// ---------------------------------------------------------------------------
// Store lifecycle
// ---------------------------------------------------------------------------

/// Create an empty store. Returns null if an internal panic occurs.
/// The caller must free the returned pointer with `todo_store_free`.
#[unsafe(no_mangle)]
pub extern "C" fn todo_store_new() -> *mut FfiTodoStore {
    catch_unwind(|| {
        Box::into_raw(Box::new(FfiTodoStore {
            inner: TodoStore::new(),
        }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a store created by `todo_store_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn todo_store_free(store: *mut FfiTodoStore) {
    if !store.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(store) });
        });
    }
}

// ---------------------------------------------------------------------------
// Store operations
// ---------------------------------------------------------------------------

/// Read a NUL-terminated UTF-8 title.
fn title_from_ptr(title: *const c_char) -> Option<String> {
    unsafe { CStr::from_ptr(title) }
        .to_str()
        .ok()
        .map(str::to_owned)
}

/// Create a todo titled `title`. On success `id` holds the new id.
#[unsafe(no_mangle)]
pub extern "C" fn todo_create_todo(
    store: *mut FfiTodoStore,
    title: *const c_char,
) -> *mut FfiTodoResult {
    catch_unwind(|| {
        if store.is_null() {
            return FfiTodoResult::null_arg("store");
        }
        if title.is_null() {
            return FfiTodoResult::null_arg("title");
        }
        let Some(title) = title_from_ptr(title) else {
            return FfiTodoResult::invalid_arg("title is not valid UTF-8");
        };
        let store = unsafe { &mut *store };
        FfiTodoResult::ok_id(store.inner.create_todo(title))
    })
    .unwrap_or_else(|_| FfiTodoResult::panic("panic in todo_create_todo"))
}

/// Read the zero-indexed `page` of `page_size` todos.
///
/// Returns a result with `data_tag = TodoList` on success, or
/// `TodoNotFoundOnPage` when the page is empty.
#[unsafe(no_mangle)]
pub extern "C" fn todo_read_todos(
    store: *const FfiTodoStore,
    page: u64,
    page_size: u64,
) -> *mut FfiTodoResult {
    catch_unwind(|| {
        if store.is_null() {
            return FfiTodoResult::null_arg("store");
        }
        let store = unsafe { &*store };
        match store.inner.read_todos(page, page_size) {
            Ok(todos) => FfiTodoResult::ok_todo_list(todos),
            Err(e) => FfiTodoResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiTodoResult::panic("panic in todo_read_todos"))
}

/// Replace the title of `id`.
///
/// `completed` uses tri-state: -1 = leave unchanged, 0 = false, 1 = true.
/// Any other value is rejected with `InvalidArg`.
#[unsafe(no_mangle)]
pub extern "C" fn todo_update_todo(
    store: *mut FfiTodoStore,
    id: u64,
    title: *const c_char,
    completed: i32,
) -> *mut FfiTodoResult {
    catch_unwind(|| {
        if store.is_null() {
            return FfiTodoResult::null_arg("store");
        }
        if title.is_null() {
            return FfiTodoResult::null_arg("title");
        }
        let completed = match completed {
            -1 => None,
            0 => Some(false),
            1 => Some(true),
            _ => return FfiTodoResult::invalid_arg("completed must be -1, 0 or 1"),
        };
        let Some(title) = title_from_ptr(title) else {
            return FfiTodoResult::invalid_arg("title is not valid UTF-8");
        };
        let store = unsafe { &mut *store };
        match store.inner.update_todo(id, title, completed) {
            Ok(()) => FfiTodoResult::ok_empty(),
            Err(e) => FfiTodoResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiTodoResult::panic("panic in todo_update_todo"))
}

/// Delete `id`. Deleting a missing id succeeds.
#[unsafe(no_mangle)]
pub extern "C" fn todo_delete_todo(store: *mut FfiTodoStore, id: u64) -> *mut FfiTodoResult {
    catch_unwind(|| {
        if store.is_null() {
            return FfiTodoResult::null_arg("store");
        }
        let store = unsafe { &mut *store };
        store.inner.delete_todo(id);
        FfiTodoResult::ok_empty()
    })
    .unwrap_or_else(|_| FfiTodoResult::panic("panic in todo_delete_todo"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiTodoResult` returned by any store operation.
/// Safe to call with null. Uses `data_tag` to determine what `data` points to.
#[unsafe(no_mangle)]
pub extern "C" fn todo_free_result(result: *mut FfiTodoResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.error_message.is_null() {
            drop(unsafe { CString::from_raw(result.error_message) });
        }
        if result.data.is_null() {
            return;
        }
        match result.data_tag {
            FfiDataTag::TodoList => {
                let list = unsafe { Box::from_raw(result.data as *mut FfiTodoList) };
                if !list.items.is_null() && list.len > 0 {
                    let items = unsafe {
                        Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                            list.items,
                            list.len as usize,
                        ))
                    };
                    for item in items.iter() {
                        if !item.title.is_null() {
                            drop(unsafe { CString::from_raw(item.title) });
                        }
                    }
                }
            }
            FfiDataTag::None => {}
        }
    });
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
