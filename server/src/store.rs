//! In-memory todo store.
//!
//! # Design
//! `TodoStore` is a cheap-to-clone handle; all clones share one map. Each
//! operation acquires the lock exactly once, so a single read or write is
//! atomic with respect to every other operation. Nothing orders concurrent
//! requests beyond that: two updates racing on the same id land in whatever
//! order they reach the lock.

use std::{collections::HashMap, sync::Arc};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A single todo record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("todo {0} not found")]
    NotFound(String),
}

/// Produces ids for newly created todos.
pub trait IdGenerator: Send + Sync {
    fn generate_id(&self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[derive(Clone)]
pub struct TodoStore {
    todos: Arc<RwLock<HashMap<String, Todo>>>,
    ids: Arc<dyn IdGenerator>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }

    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self {
            todos: Arc::new(RwLock::new(HashMap::new())),
            ids: Arc::new(ids),
        }
    }

    /// All todos, in no particular order.
    pub async fn list(&self) -> Vec<Todo> {
        self.todos.read().await.values().cloned().collect()
    }

    pub async fn get(&self, id: &str) -> Result<Todo, StoreError> {
        self.todos
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub async fn create(&self, text: String) -> Todo {
        let todo = Todo {
            id: self.ids.generate_id(),
            text,
        };
        self.todos.write().await.insert(todo.id.clone(), todo.clone());
        tracing::debug!(id = %todo.id, "todo created");
        todo
    }

    /// Replace the text of an existing todo. A miss leaves the store untouched.
    pub async fn update(&self, id: &str, text: String) -> Result<Todo, StoreError> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        todo.text = text;
        tracing::debug!(id, "todo updated");
        Ok(todo.clone())
    }

    pub async fn delete(&self, id: &str) -> Result<Todo, StoreError> {
        let removed = self
            .todos
            .write()
            .await
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        tracing::debug!(id, "todo deleted");
        Ok(removed)
    }

    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}
