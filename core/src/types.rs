//! Wire DTOs for the todo API.
//!
//! Defined independently from the server crate; the integration test catches
//! schema drift between the two.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub text: String,
}

/// Request payload for `POST /todos` and `PUT /todos/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoInput {
    pub text: String,
}

impl TodoInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
