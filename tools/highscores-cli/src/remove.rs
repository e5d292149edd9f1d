//! Non-interactive removal

use anyhow::{Context, Result};
use clap::Args;
use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use highscores_core::{Confirmation, EditSession, Phase, Removal};

use crate::console::os_bytes;
use crate::table::{self, text};

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Scenario name to remove (first match); repeat for more
    #[arg(short, long = "name", value_name = "NAME", required = true)]
    pub names: Vec<OsString>,

    /// Write the result instead of only showing it
    #[arg(short, long)]
    pub yes: bool,
}

pub fn execute<W: Write>(path: &Path, args: RemoveArgs, backup: bool, out: &mut W) -> Result<()> {
    let mut session = EditSession::load(path)
        .with_context(|| format!("Failed to read highscores: {}", path.display()))?
        .with_backup(backup);

    session.begin()?;
    if session.is_done() {
        writeln!(out, "No scenarios in this file, nothing to be done")?;
        return Ok(());
    }

    for name in &args.names {
        let name = os_bytes(name);
        let shown = text(&name);
        if session.phase() != Phase::Selecting {
            writeln!(out, "No scenarios left; skipping \"{shown}\"")?;
            continue;
        }
        match session.remove(&name)? {
            Removal::Removed => writeln!(out, "Marked \"{shown}\" for removal")?,
            Removal::NoMatch => writeln!(out, "No scenario named \"{shown}\"")?,
        }
    }

    if session.phase() == Phase::Selecting {
        session.stop()?;
    }

    if session.phase() == Phase::Committing {
        table::render(out, session.surviving(), session.removed())?;
        if args.yes {
            session.confirm(Confirmation::Yes)?;
            writeln!(out, "Saved {}", path.display())?;
        } else {
            session.confirm(Confirmation::No)?;
            writeln!(out, "Dry run; pass --yes to write these changes")?;
        }
    } else {
        writeln!(out, "Nothing to remove")?;
    }

    Ok(())
}
