//! Print the records of a highscores file

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use highscores_core::EditSession;

use crate::table::{self, Columns};

pub fn execute<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let session = EditSession::load(path)
        .with_context(|| format!("Failed to read highscores: {}", path.display()))?;

    let records = session.surviving();
    writeln!(out, "{}: {} scenarios", path.display(), records.len())?;
    table::write_rows(out, records, &Columns::measure(records))?;
    Ok(())
}
