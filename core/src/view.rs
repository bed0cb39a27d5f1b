//! Client-side view of the todo collection.
//!
//! # Design
//! `TodoList` keeps a local, possibly stale copy of the server's todos plus
//! the loading and error flags a UI renders from. Mutations send their
//! request and then patch the local list; a failed request is logged and
//! returned, never rolled back. Requests are issued one at a time by the
//! caller with no sequencing between them, so local state may drift from the
//! server's until the next `load`.

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{Todo, TodoInput};

/// Message shown when the initial fetch fails.
pub const GENERIC_ERROR: &str = "Something went wrong";

/// What a UI should draw, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState<'a> {
    Loading,
    Error(&'a str),
    Ready(&'a [Todo]),
}

pub struct TodoList<T> {
    client: TodoClient,
    transport: T,
    todos: Vec<Todo>,
    loading: bool,
    error: Option<String>,
}

impl<T: Transport> TodoList<T> {
    /// Starts in the loading state; call `load` to fetch.
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            client,
            transport,
            todos: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// Fetch the full list, replacing local state.
    pub fn load(&mut self) {
        self.loading = true;
        self.error = None;
        let request = self.client.build_list_todos();
        let result = self
            .transport
            .execute(request)
            .and_then(|response| self.client.parse_list_todos(response));
        match result {
            Ok(todos) => self.todos = todos,
            Err(e) => {
                tracing::error!(error = %e, "failed to load todos");
                self.error = Some(GENERIC_ERROR.to_string());
            }
        }
        self.loading = false;
    }

    /// Create a todo and append the server's copy locally.
    pub fn add(&mut self, text: &str) -> Result<&Todo, ApiError> {
        let result = self
            .client
            .build_create_todo(&TodoInput::new(text))
            .and_then(|request| self.transport.execute(request))
            .and_then(|response| self.client.parse_create_todo(response));
        match result {
            Ok(todo) => {
                self.todos.push(todo);
                let index = self.todos.len() - 1;
                Ok(&self.todos[index])
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to add todo");
                Err(e)
            }
        }
    }

    /// Send the new text and patch it locally once any response arrives.
    ///
    /// The local copy is patched even when the server rejects the update
    /// (for example a 404); the rejection is only logged and returned.
    pub fn update(&mut self, id: &str, text: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .build_update_todo(id, &TodoInput::new(text))
            .and_then(|request| self.transport.execute(request))
            .inspect_err(|e| tracing::error!(error = %e, %id, "failed to update todo"))?;

        let outcome = self.client.parse_update_todo(response).map(|_| ());
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            todo.text = text.to_string();
        }
        outcome.inspect_err(|e| tracing::error!(error = %e, %id, "server rejected update"))
    }

    /// Send the delete and drop the todo locally once any response arrives.
    pub fn delete(&mut self, id: &str) -> Result<(), ApiError> {
        let request = self.client.build_delete_todo(id);
        let response = self
            .transport
            .execute(request)
            .inspect_err(|e| tracing::error!(error = %e, %id, "failed to delete todo"))?;

        let outcome = self.client.parse_delete_todo(response).map(|_| ());
        self.todos.retain(|todo| todo.id != id);
        outcome.inspect_err(|e| tracing::error!(error = %e, %id, "server rejected delete"))
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn state(&self) -> ViewState<'_> {
        if self.loading {
            ViewState::Loading
        } else if let Some(error) = &self.error {
            ViewState::Error(error)
        } else {
            ViewState::Ready(&self.todos)
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};

    /// Replays canned outcomes in order and records every request.
    #[derive(Default)]
    struct ScriptedTransport {
        outcomes: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
        sent: RefCell<Vec<HttpRequest>>,
    }

    impl ScriptedTransport {
        fn respond(self, status: u16, body: &str) -> Self {
            self.outcomes.borrow_mut().push_back(Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            }));
            self
        }

        fn fail(self) -> Self {
            self.outcomes
                .borrow_mut()
                .push_back(Err(ApiError::TransportError("connection refused".to_string())));
            self
        }
    }

    impl Transport for ScriptedTransport {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.sent.borrow_mut().push(request);
            self.outcomes
                .borrow_mut()
                .pop_front()
                .expect("no scripted response left")
        }
    }

    fn list(transport: ScriptedTransport) -> TodoList<ScriptedTransport> {
        TodoList::new(TodoClient::new("http://localhost:5000"), transport)
    }

    fn todo(id: &str, text: &str) -> Todo {
        Todo {
            id: id.to_string(),
            text: text.to_string(),
        }
    }

    const TWO: &str = r#"[{"id":"a","text":"first"},{"id":"b","text":"second"}]"#;

    #[test]
    fn starts_loading() {
        let view = list(ScriptedTransport::default());
        assert!(view.is_loading());
        assert_eq!(view.state(), ViewState::Loading);
    }

    #[test]
    fn load_replaces_todos() {
        let mut view = list(ScriptedTransport::default().respond(200, TWO));
        view.load();

        assert!(!view.is_loading());
        assert_eq!(view.error(), None);
        assert_eq!(view.todos(), [todo("a", "first"), todo("b", "second")]);
        assert!(matches!(view.state(), ViewState::Ready(todos) if todos.len() == 2));
        assert_eq!(view.transport().sent.borrow()[0].method, HttpMethod::Get);
    }

    #[test]
    fn load_failure_sets_generic_error() {
        let mut view = list(ScriptedTransport::default().fail());
        view.load();

        assert!(!view.is_loading());
        assert_eq!(view.state(), ViewState::Error("Something went wrong"));
    }

    #[test]
    fn load_with_bad_body_sets_generic_error() {
        let mut view = list(ScriptedTransport::default().respond(200, "<html>"));
        view.load();
        assert_eq!(view.error(), Some(GENERIC_ERROR));
    }

    #[test]
    fn add_appends_server_copy() {
        let mut view = list(
            ScriptedTransport::default()
                .respond(200, TWO)
                .respond(201, r#"{"id":"c","text":"third"}"#),
        );
        view.load();

        let added = view.add("third").unwrap().clone();
        assert_eq!(added, todo("c", "third"));
        assert_eq!(view.todos().last(), Some(&added));
        assert_eq!(view.todos().len(), 3);

        let sent = view.transport().sent.borrow();
        assert_eq!(sent[1].method, HttpMethod::Post);
        assert_eq!(sent[1].body.as_deref(), Some(r#"{"text":"third"}"#));
    }

    #[test]
    fn add_failure_leaves_list_untouched() {
        let mut view = list(ScriptedTransport::default().respond(200, TWO).fail());
        view.load();

        assert!(view.add("lost").is_err());
        assert_eq!(view.todos().len(), 2);
        assert_eq!(view.error(), None);
    }

    #[test]
    fn update_patches_local_text() {
        let mut view = list(
            ScriptedTransport::default()
                .respond(200, TWO)
                .respond(200, r#"{"id":"a","text":"renamed"}"#),
        );
        view.load();

        view.update("a", "renamed").unwrap();
        assert_eq!(view.todos()[0], todo("a", "renamed"));
        assert_eq!(view.todos()[1], todo("b", "second"));
    }

    #[test]
    fn update_rejected_by_server_still_patches_locally() {
        let mut view = list(
            ScriptedTransport::default()
                .respond(200, TWO)
                .respond(404, r#"{"error":"Todo not found"}"#),
        );
        view.load();

        let err = view.update("a", "diverged").unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
        assert_eq!(view.todos()[0].text, "diverged");
    }

    #[test]
    fn update_transport_failure_does_not_patch() {
        let mut view = list(ScriptedTransport::default().respond(200, TWO).fail());
        view.load();

        assert!(view.update("a", "never").is_err());
        assert_eq!(view.todos()[0].text, "first");
    }

    #[test]
    fn delete_removes_locally() {
        let mut view = list(
            ScriptedTransport::default()
                .respond(200, TWO)
                .respond(200, r#"{"id":"a","text":"first"}"#),
        );
        view.load();

        view.delete("a").unwrap();
        assert_eq!(view.todos(), [todo("b", "second")]);
        assert_eq!(view.transport().sent.borrow()[1].method, HttpMethod::Delete);
    }

    #[test]
    fn delete_transport_failure_keeps_item() {
        let mut view = list(ScriptedTransport::default().respond(200, TWO).fail());
        view.load();

        assert!(view.delete("a").is_err());
        assert_eq!(view.todos().len(), 2);
    }

    #[test]
    fn update_before_add_response_misses_the_new_item() {
        // The id only exists locally once the create response has been applied.
        let mut view = list(
            ScriptedTransport::default()
                .respond(200, "[]")
                .respond(200, r#"{"id":"c","text":"edited"}"#)
                .respond(201, r#"{"id":"c","text":"draft"}"#),
        );
        view.load();

        view.update("c", "edited").unwrap();
        view.add("draft").unwrap();
        assert_eq!(view.todos(), [todo("c", "draft")]);
    }
}
