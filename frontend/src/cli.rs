//! Argument and command-line definitions.

use clap::{CommandFactory, Parser, Subcommand};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Process arguments.
#[derive(Debug, Parser)]
#[command(name = "todo-frontend", version, about = "Terminal client for the todo service")]
pub struct Cli {
    /// Base URL of the todo API.
    #[arg(long, env = "TODO_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

/// One line typed at the prompt.
#[derive(Debug, Parser)]
#[command(multicall = true)]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show the current list.
    #[command(visible_alias = "ls")]
    List,
    /// Fetch the list from the server again.
    Reload,
    /// Add a todo; the rest of the line is its text, kept as typed.
    Add {
        #[arg(skip)]
        text: String,
    },
    /// Replace the text of a todo, addressed by list number or id.
    Edit {
        target: String,
        #[arg(skip)]
        text: String,
    },
    /// Delete a todo, addressed by list number or id.
    #[command(visible_alias = "delete")]
    Rm { target: String },
    /// Leave the session.
    #[command(visible_alias = "exit")]
    Quit,
}

impl Line {
    /// Parse one prompt line.
    ///
    /// Only the command word and its positional arguments go through clap.
    /// For `add` and `edit` everything after them, minus one separating
    /// space, is the todo text verbatim and may be empty.
    pub fn parse_line(line: &str) -> Result<Command, clap::Error> {
        let (word, mut rest) = split_word(line);
        let positionals = Line::command()
            .find_subcommand(word)
            .map_or(0, |sub| sub.get_positionals().count());

        let mut args = vec![word];
        for _ in 0..positionals {
            let (arg, tail) = split_word(rest);
            if arg.is_empty() {
                break;
            }
            args.push(arg);
            rest = tail;
        }

        match Line::try_parse_from(args)?.command {
            Command::Add { .. } => Ok(Command::Add {
                text: rest.to_string(),
            }),
            Command::Edit { target, .. } => Ok(Command::Edit {
                target,
                text: rest.to_string(),
            }),
            _ => Line::try_parse_from(line.split_whitespace()).map(|line| line.command),
        }
    }
}

/// Split off the first word, dropping the single whitespace that ends it.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.char_indices().find(|(_, c)| c.is_whitespace()) {
        Some((end, separator)) => (&input[..end], &input[end + separator.len_utf8()..]),
        None => (input, ""),
    }
}
