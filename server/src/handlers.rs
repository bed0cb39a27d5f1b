use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::error::ApiError;
use crate::store::{Todo, TodoStore};

/// Application context shared by every handler.
#[derive(Clone, Default)]
pub struct AppState {
    pub store: TodoStore,
}

impl AppState {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }
}

/// Body of `POST /todos` and `PUT /todos/{id}`.
#[derive(Debug, PartialEq, Eq)]
pub struct TodoInput {
    pub text: String,
}

impl TodoInput {
    /// Parse a request body regardless of its content type. Only a body that
    /// is not JSON is rejected: missing or null `text` becomes "", and any
    /// other non-string value is kept as its JSON rendering.
    pub fn from_json(body: &[u8]) -> Result<Self, ApiError> {
        let value: Value = serde_json::from_slice(body)?;
        let text = match value.get("text") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        };
        Ok(Self { text })
    }
}

pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.store.list().await)
}

pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(state.store.get(&id).await?))
}

pub async fn create_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let input = TodoInput::from_json(&body)?;
    let todo = state.store.create(input.text).await;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Todo>, ApiError> {
    let input = TodoInput::from_json(&body)?;
    Ok(Json(state.store.update(&id, input.text).await?))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(state.store.delete(&id).await?))
}
