//! Stateless HTTP request builder and response parser for `todo-server`.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each store operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`; the caller runs the round-trip in between.
//!
//! The server relays store errors as a 404 whose body is the JSON-encoded
//! `TodoError`. Those come back as `ApiError::Todo`, so remote callers see
//! the same error values as in-process ones.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, TodoError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, CreatedTodo, Todo, UpdateTodo};

#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, format!("{}/todos", self.base_url), input)
    }

    pub fn build_read_todos(&self, page: u64, page_size: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos?page={page}&page_size={page_size}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_update_todo(&self, id: u64, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, format!("{}/todos/{id}", self.base_url), input)
    }

    pub fn build_delete_todo(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<u64, ApiError> {
        check_status(&response, 201)?;
        let created: CreatedTodo = decode(&response.body)?;
        Ok(created.id)
    }

    pub fn parse_read_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    fn json_request<T: Serialize>(
        &self,
        method: HttpMethod,
        path: String,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        if let Ok(err) = serde_json::from_str::<TodoError>(&response.body) {
            return Err(ApiError::Todo(err));
        }
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
