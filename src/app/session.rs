use crate::app::view::{render_categories, render_listing, render_page};
use crate::core::catalog::{CatalogState, LoadOutcome};
use crate::core::loader::{CourseLoader, PendingLoad};
use crate::utils::error::Result;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const HELP_TEXT: &str = "\
Commands:
  search <text>      filter by title or provider (empty clears)
  category <name>    show one category ('all' for every category)
  clear              reset search and category
  next | n           next page
  prev | p           previous page
  page <n>           jump to page n
  categories         list selectable categories
  show               print the current page again
  help               this text
  quit | q           leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Category(String),
    Clear,
    Next,
    Previous,
    Page(usize),
    Categories,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "search" | "s" => Ok(Command::Search(rest.to_string())),
            "category" | "c" => Ok(Command::Category(rest.to_string())),
            "clear" => Ok(Command::Clear),
            "next" | "n" => Ok(Command::Next),
            "prev" | "previous" | "p" => Ok(Command::Previous),
            "page" => rest
                .parse::<usize>()
                .map(Command::Page)
                .map_err(|_| format!("'{}' is not a page number", rest)),
            "categories" => Ok(Command::Categories),
            "show" | "" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("Unknown command '{}'. Type 'help' for a list.", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// State may have changed; show the listing again.
    Render,
    /// Nothing changed; print a short note instead.
    Message(String),
    Exit,
}

pub fn apply_command(state: &mut CatalogState, command: Command) -> CommandOutcome {
    match command {
        Command::Search(text) => {
            state.set_search(text);
            CommandOutcome::Render
        }
        Command::Category(category) => {
            state.set_category(category);
            CommandOutcome::Render
        }
        Command::Clear => {
            state.clear_filters();
            CommandOutcome::Render
        }
        Command::Next => {
            if state.next_page() {
                CommandOutcome::Render
            } else {
                CommandOutcome::Message("Already on the last page.".to_string())
            }
        }
        Command::Previous => {
            if state.previous_page() {
                CommandOutcome::Render
            } else {
                CommandOutcome::Message("Already on the first page.".to_string())
            }
        }
        Command::Page(page) => {
            state.go_to_page(page);
            CommandOutcome::Render
        }
        Command::Categories => {
            CommandOutcome::Message(render_categories(&state.category_options()))
        }
        Command::Show => CommandOutcome::Render,
        Command::Help => CommandOutcome::Message(HELP_TEXT.to_string()),
        Command::Quit => CommandOutcome::Exit,
    }
}

enum Event {
    Loaded(LoadOutcome),
    Line(Option<String>),
}

async fn wait_for_load(pending: &mut Option<PendingLoad>) -> LoadOutcome {
    match pending {
        Some(load) => load.await,
        None => std::future::pending().await,
    }
}

/// Interactive loop: commands are read from `input` while the course fetch
/// runs in the background, and every change is rendered to `output`.
pub async fn run_session<R, W>(
    loader: &CourseLoader,
    state: &mut CatalogState,
    detail_prefix: &str,
    input: R,
    mut output: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut pending = Some(loader.start(state));
    let mut lines = input.lines();

    output
        .write_all(render_page(state, detail_prefix).as_bytes())
        .await?;
    output.write_all(b"Type 'help' for commands.\n> ").await?;
    output.flush().await?;

    loop {
        let event = tokio::select! {
            outcome = wait_for_load(&mut pending) => Event::Loaded(outcome),
            line = lines.next_line() => Event::Line(line?),
        };

        let text = match event {
            Event::Loaded(outcome) => {
                pending = None;
                state.finish_load(outcome);
                render_listing(state, detail_prefix)
            }
            Event::Line(None) => break,
            Event::Line(Some(line)) => match line.parse::<Command>() {
                Ok(command) => {
                    tracing::debug!("Session command: {:?}", command);
                    match apply_command(state, command) {
                        CommandOutcome::Render => render_listing(state, detail_prefix),
                        CommandOutcome::Message(message) => message,
                        CommandOutcome::Exit => break,
                    }
                }
                Err(message) => message,
            },
        };

        output.write_all(text.as_bytes()).await?;
        if !text.ends_with('\n') {
            output.write_all(b"\n").await?;
        }
        output.write_all(b"> ").await?;
        output.flush().await?;
    }

    state.tear_down();
    output.flush().await?;
    Ok(())
}
