//! Interactive prompt loop.

use std::io::{self, BufRead, Write};

use todo_core::{Todo, TodoList, Transport};

use crate::cli::{Command, Line};
use crate::render::render;

const PROMPT: &str = "> ";

/// Load the list, then read commands until `quit` or end of input.
pub fn run<T: Transport>(
    view: &mut TodoList<T>,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    write!(out, "{}", render(view.state()))?;
    view.load();
    write!(out, "{}{PROMPT}", render(view.state()))?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(out, "{PROMPT}")?;
            out.flush()?;
            continue;
        }
        match Line::parse_line(&line) {
            Ok(Command::Quit) => return Ok(()),
            Ok(command) => {
                apply(view, command, out)?;
                write!(out, "{}", render(view.state()))?;
            }
            Err(e) => write!(out, "{e}")?,
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }
    Ok(())
}

fn apply<T: Transport>(
    view: &mut TodoList<T>,
    command: Command,
    out: &mut impl Write,
) -> io::Result<()> {
    match command {
        Command::List | Command::Quit => {}
        Command::Reload => view.load(),
        Command::Add { text } => {
            if let Err(e) = view.add(&text) {
                writeln!(out, "could not add todo: {e}")?;
            }
        }
        Command::Edit { target, text } => {
            let id = resolve_target(view.todos(), &target);
            if let Err(e) = view.update(&id, &text) {
                writeln!(out, "could not update todo: {e}")?;
            }
        }
        Command::Rm { target } => {
            let id = resolve_target(view.todos(), &target);
            if let Err(e) = view.delete(&id) {
                writeln!(out, "could not delete todo: {e}")?;
            }
        }
    }
    Ok(())
}

/// A 1-based list number picks that row; anything else is taken as an id.
fn resolve_target(todos: &[Todo], target: &str) -> String {
    target
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| todos.get(index))
        .map_or_else(|| target.to_string(), |todo| todo.id.clone())
}
