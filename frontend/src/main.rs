use std::io;
use std::process::ExitCode;

use clap::Parser;
use todo_core::{TodoClient, TodoList, UreqTransport};
use tracing_subscriber::EnvFilter;

mod cli;
mod render;
mod session;

fn main() -> ExitCode {
    // Logs go to stderr so they do not interleave with the rendered list.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = cli::Cli::parse();
    tracing::info!(api_url = %cli.api_url, "starting session");

    let mut view = TodoList::new(TodoClient::new(&cli.api_url), UreqTransport::new());
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match session::run(&mut view, stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
