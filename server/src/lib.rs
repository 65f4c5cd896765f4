//! HTTP transport for a single `TodoStore`.
//!
//! # Design
//! The router owns one store behind a `tokio::sync::RwLock`. Page reads take
//! the read lock; create, update and delete take the write lock, so each call
//! runs to completion before the next mutation starts. Store errors are
//! relayed as `404` with the JSON-encoded `TodoError` as body.

pub mod config;

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use tokio::{net::TcpListener, sync::RwLock};
use todo_core::{CreateTodo, CreatedTodo, Todo, TodoError, TodoStore, UpdateTodo};

pub use config::Config;

pub type Db = Arc<RwLock<TodoStore>>;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub default_page_size: u64,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            db: Arc::new(RwLock::new(TodoStore::new())),
            default_page_size: config.default_page_size,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

/// A store error on its way back to the caller.
#[derive(Debug)]
pub struct StoreError(pub TodoError);

impl From<TodoError> for StoreError {
    fn from(err: TodoError) -> Self {
        Self(err)
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, Json(self.0)).into_response()
    }
}

/// Router over a fresh store with default settings.
pub fn app() -> Router {
    router(AppState::new(&Config::default()))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(read_todos).post(create_todo))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
        .with_state(state)
}

pub async fn run(listener: TcpListener, config: &Config) -> Result<(), std::io::Error> {
    axum::serve(listener, router(AppState::new(config))).await
}

async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<CreatedTodo>) {
    let id = state.db.write().await.create_todo(input.title);
    (StatusCode::CREATED, Json(CreatedTodo { id }))
}

async fn read_todos(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<Todo>>, StoreError> {
    let page = query.page.unwrap_or(0);
    let page_size = query.page_size.unwrap_or(state.default_page_size);
    let todos = state.db.read().await.read_todos(page, page_size)?;
    Ok(Json(todos))
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTodo>,
) -> Result<StatusCode, StoreError> {
    state
        .db
        .write()
        .await
        .update_todo(id, input.title, input.completed)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_todo(State(state): State<AppState>, Path(id): Path<u64>) -> StatusCode {
    state.db.write().await.delete_todo(id);
    StatusCode::NO_CONTENT
}
