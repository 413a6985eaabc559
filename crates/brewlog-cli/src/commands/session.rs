//! Interactive session
//!
//! Keeps one `BeerView` alive across commands, the way the screen keeps
//! its current detail and history list between taps.

use std::io::{self, BufRead, Write};

use brewlog_core::model::RecordId;
use brewlog_core::render::{render_detail, render_history};
use brewlog_core::view::BeerView;
use brewlog_engine::{load_history, trigger_fetch, BeerSource};
use brewlog_store::HistoryStore;

use super::{CommandResult, GlobalArgs};

const HELP: &str = "\
Commands:
  fetch, f        fetch a random beer and record it
  select <id>, s  show a beer from history
  history, h      list the history
  current, c      show the current beer
  help            show this help
  quit, q         leave the session
";

const PROMPT: &str = "brewlog> ";

#[derive(Debug, PartialEq, Eq)]
enum SessionCommand {
    Fetch,
    Select(RecordId),
    History,
    Current,
    Help,
    Quit,
    Empty,
}

fn parse_command(line: &str) -> Result<SessionCommand, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(SessionCommand::Empty);
    };
    let arg = parts.next();
    if parts.next().is_some() {
        return Err(format!("too many arguments: {}", line.trim()));
    }

    let command = match word {
        "fetch" | "f" => SessionCommand::Fetch,
        "history" | "h" => SessionCommand::History,
        "current" | "c" => SessionCommand::Current,
        "help" | "?" => SessionCommand::Help,
        "quit" | "q" | "exit" => SessionCommand::Quit,
        "select" | "s" => {
            let id = arg.ok_or_else(|| "usage: select <id>".to_string())?;
            return id
                .parse::<i64>()
                .map(|id| SessionCommand::Select(RecordId(id)))
                .map_err(|_| format!("not a record id: {}", id));
        }
        _ => return Err(format!("unknown command: {} (try 'help')", line.trim())),
    };

    match arg {
        Some(_) => Err(format!("{} takes no arguments", word)),
        None => Ok(command),
    }
}

pub fn execute(global: &GlobalArgs) -> CommandResult {
    let source = global.http_source()?;
    let store = global.open_store_optional();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), &source, store.as_ref())?;
    Ok(())
}

/// Drive a session until `quit` or end of input
pub fn run_session<R, W, S>(
    input: R,
    mut output: W,
    source: &S,
    store: Option<&HistoryStore>,
) -> io::Result<BeerView>
where
    R: BufRead,
    W: Write,
    S: BeerSource + ?Sized,
{
    let mut view = BeerView::new();
    if let Some(store) = store {
        if let Err(e) = load_history(store, &mut view) {
            writeln!(output, "Could not load history: {}", e)?;
        }
    }

    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(SessionCommand::Quit) => break,
            Ok(SessionCommand::Empty) => {}
            Ok(SessionCommand::Help) => write!(output, "{}", HELP)?,
            Ok(SessionCommand::Fetch) => {
                let outcome = trigger_fetch(source, store, &mut view);
                writeln!(output, "{}", outcome)?;
                if let Some(detail) = view.current().filter(|_| outcome.fetched()) {
                    write!(output, "{}", render_detail(detail))?;
                }
            }
            Ok(SessionCommand::Select(id)) => match view.select_by_id(id) {
                Ok(detail) => write!(output, "{}", render_detail(detail))?,
                Err(e) => writeln!(output, "{}", e)?,
            },
            Ok(SessionCommand::History) => write!(output, "{}", render_history(view.history()))?,
            Ok(SessionCommand::Current) => match view.current() {
                Some(detail) => write!(output, "{}", render_detail(detail))?,
                None => writeln!(output, "No beer selected yet")?,
            },
            Err(message) => writeln!(output, "{}", message)?,
        }
        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(view)
}
