//! Interactive editing session

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use highscores_core::{Confirmation, EditSession, FormatError, Phase, Removal, SessionError};

use crate::console::{Console, path_from_bytes};
use crate::table::{self, text};

const PATH_PROMPT: &str = "Please enter the location of the highscores file (exit to exit): ";
const REMOVE_PROMPT: &str =
    "Type \"exit\" to exit. Type a full scenario name to mark for removal: ";
const SAVE_PROMPT: &str = "WARNING: Your highscores will be overwritten. Save changes? (y/N): ";

/// Open a highscores file (asking for one if needed) and edit it.
pub fn execute<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    path: Option<PathBuf>,
    backup: bool,
) -> Result<()> {
    let mut candidate = path;

    let session = loop {
        let path = match candidate.take().filter(|p| p.is_file()) {
            Some(path) => path,
            None => match console.prompt(PATH_PROMPT)? {
                Some(input) if !input.is_empty() && input != b"exit" => {
                    let path = path_from_bytes(input);
                    if !path.is_file() {
                        writeln!(console.out(), "No file found at {}", path.display())?;
                        continue;
                    }
                    path
                }
                _ => return Ok(()),
            },
        };

        match EditSession::load(&path) {
            Ok(session) => break session.with_backup(backup),
            Err(e) => {
                tracing::warn!("{}", e);
                report_load_error(console.out(), &e)?;
            }
        }
    };

    run_session(console, session)
}

/// Tell an unreadable file apart from one that is not a highscores file.
fn report_load_error<W: Write>(out: &mut W, error: &SessionError) -> io::Result<()> {
    match error {
        SessionError::Load {
            source: FormatError::Io(source),
            ..
        } => writeln!(out, "Could not read that file: {source}"),
        _ => writeln!(out, "That file is not a valid highscores file."),
    }
}

fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mut session: EditSession,
) -> Result<()> {
    session.begin()?;
    if session.is_done() {
        writeln!(console.out(), "No scenarios in this file, nothing to be done")?;
        return Ok(());
    }

    writeln!(console.out(), "I found the following scenarios: ")?;
    select(console, &mut session)?;

    if session.phase() == Phase::Committing {
        writeln!(console.out(), "Changes were made. Current status:")?;
        table::render(console.out(), session.surviving(), session.removed())?;
        confirm_save(console, &mut session)?;
    }

    let path = session.path().to_path_buf();
    let outcome = session.finish()?;
    if outcome.written() {
        writeln!(
            console.out(),
            "Saved {} scenarios to {}",
            outcome.surviving.len(),
            path.display()
        )?;
    } else {
        writeln!(console.out(), "No changes were written")?;
    }
    Ok(())
}

fn select<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut EditSession,
) -> Result<()> {
    while session.phase() == Phase::Selecting {
        table::render(console.out(), session.surviving(), session.removed())?;

        let name = match console.prompt(REMOVE_PROMPT)? {
            Some(name) if name != b"exit" => name,
            _ => {
                session.stop()?;
                break;
            }
        };

        let shown = text(&name);
        match session.remove(&name)? {
            Removal::Removed => writeln!(
                console.out(),
                "{shown} removed. Changes can be reviewed at the end"
            )?,
            Removal::NoMatch => writeln!(console.out(), "No scenario named \"{shown}\"")?,
        }

        if session.phase() == Phase::Committing {
            writeln!(console.out(), "There are no scenarios left to remove")?;
        }
    }
    Ok(())
}

fn confirm_save<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut EditSession,
) -> Result<()> {
    loop {
        let answer = console
            .prompt(SAVE_PROMPT)?
            .map_or(Confirmation::No, |input| Confirmation::parse(&text(&input)));

        match session.confirm(answer) {
            Ok(_) => return Ok(()),
            Err(e @ SessionError::Commit { .. }) => {
                tracing::error!("{}", e);
                writeln!(console.out(), "Could not save changes: {e}")?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
