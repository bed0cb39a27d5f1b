use todo_core::{Todo, ViewState};

pub fn render(state: ViewState<'_>) -> String {
    match state {
        ViewState::Loading => "Loading...\n".to_string(),
        ViewState::Error(message) => format!("Error: {message}\n"),
        ViewState::Ready([]) => "No todos yet.\n".to_string(),
        ViewState::Ready(todos) => todos
            .iter()
            .enumerate()
            .map(|(index, todo)| render_item(index + 1, todo))
            .collect(),
    }
}

fn render_item(number: usize, todo: &Todo) -> String {
    format!("{number:>3}. {}  [{}]\n", todo.text, todo.id)
}
