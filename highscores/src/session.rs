//! Edit session state machine
//!
//! ```text
//! Loaded ──begin──> Selecting ──stop / exhausted──> Committing ──confirm(Yes)──> Done(Committed)
//!    │                  │                               │
//!    │                  └──stop, nothing removed──┐     └──confirm(No)──> Done(Discarded)
//!    │                                            └──────────────────────> Done(Discarded)
//!    └──begin, no records──> Done(NothingToDo)
//! ```
//!
//! The file on disk is only touched by `confirm(Confirmation::Yes)`.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{FormatError, SessionError};
use crate::format;
use crate::fs::{MAX_HIGHSCORES_BYTES, read_file_with_limit, write_atomic};
use crate::record::{Record, RecordFile};
use crate::store::RecordStore;

/// How a session reached [`Phase::Done`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The file had no records.
    NothingToDo,
    /// Nothing was removed, or saving was declined. The file is unchanged.
    Discarded,
    /// The surviving records were written back.
    Committed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loaded,
    Selecting,
    /// Records are pending removal; waiting for save confirmation.
    Committing,
    Done(Resolution),
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Loaded => f.write_str("loaded"),
            Phase::Selecting => f.write_str("selecting"),
            Phase::Committing => f.write_str("awaiting save confirmation"),
            Phase::Done(_) => f.write_str("done"),
        }
    }
}

/// Result of naming a record for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed,
    NoMatch,
}

/// Operator answer to the save prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
}

impl Confirmation {
    /// Case-insensitive `y`/`yes` confirms; anything else denies.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Confirmation::Yes,
            _ => Confirmation::No,
        }
    }
}

/// Final state of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub resolution: Resolution,
    pub surviving: Vec<Record>,
    pub removed: Vec<Record>,
}

impl Outcome {
    pub fn written(&self) -> bool {
        self.resolution == Resolution::Committed
    }
}

/// One load-select-save pass over a highscores file.
#[derive(Debug)]
pub struct EditSession {
    path: PathBuf,
    store: RecordStore,
    phase: Phase,
    backup: bool,
}

impl EditSession {
    /// Read and decode the file at `path`.
    ///
    /// Any failure is returned as [`SessionError::Load`]; the caller may
    /// simply try another path.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();

        let file = read_file_with_limit(&path, MAX_HIGHSCORES_BYTES)
            .map_err(FormatError::from)
            .and_then(|bytes| format::decode(bytes.as_slice()));

        match file {
            Ok(file) => {
                tracing::info!("Loaded {} records from {}", file.len(), path.display());
                Ok(Self::from_file(path, file))
            }
            Err(source) => {
                tracing::debug!("Rejected {}: {}", path.display(), source);
                Err(SessionError::Load { path, source })
            }
        }
    }

    /// Start a session over an already decoded file that lives at `path`.
    pub fn from_file(path: impl Into<PathBuf>, file: RecordFile) -> Self {
        Self {
            path: path.into(),
            store: RecordStore::from(file),
            phase: Phase::Loaded,
            backup: false,
        }
    }

    /// Copy the original file to `<path>.bak` before overwriting it.
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done(_))
    }

    pub fn surviving(&self) -> &[Record] {
        self.store.surviving()
    }

    pub fn removed(&self) -> &[Record] {
        self.store.removed()
    }

    /// Leave `Loaded`. An empty file finishes immediately.
    pub fn begin(&mut self) -> Result<Phase, SessionError> {
        self.expect(Phase::Loaded, "begin selection")?;

        self.phase = if self.store.is_exhausted() {
            Phase::Done(Resolution::NothingToDo)
        } else {
            Phase::Selecting
        };
        Ok(self.phase)
    }

    /// Mark the first surviving record called `name` for removal.
    ///
    /// Removing the last surviving record ends selection.
    pub fn remove(&mut self, name: &[u8]) -> Result<Removal, SessionError> {
        self.expect(Phase::Selecting, "remove a record")?;

        if !self.store.remove_first_by_name(name) {
            return Ok(Removal::NoMatch);
        }

        tracing::debug!("Marked '{}' for removal", String::from_utf8_lossy(name));
        if self.store.is_exhausted() {
            self.phase = Phase::Committing;
        }
        Ok(Removal::Removed)
    }

    /// End selection.
    pub fn stop(&mut self) -> Result<Phase, SessionError> {
        self.expect(Phase::Selecting, "stop selection")?;

        self.phase = if self.store.has_pending_removals() {
            Phase::Committing
        } else {
            Phase::Done(Resolution::Discarded)
        };
        Ok(self.phase)
    }

    /// Answer the save prompt.
    ///
    /// On a write failure the session stays in `Committing` with its records
    /// intact, so the save can be retried.
    pub fn confirm(&mut self, answer: Confirmation) -> Result<Phase, SessionError> {
        self.expect(Phase::Committing, "confirm saving")?;

        match answer {
            Confirmation::Yes => {
                self.commit()?;
                self.phase = Phase::Done(Resolution::Committed);
            }
            Confirmation::No => {
                tracing::info!(
                    "Discarded {} pending removals; {} left unchanged",
                    self.store.removed().len(),
                    self.path.display()
                );
                self.phase = Phase::Done(Resolution::Discarded);
            }
        }
        Ok(self.phase)
    }

    /// Consume a finished session.
    pub fn finish(self) -> Result<Outcome, SessionError> {
        let Phase::Done(resolution) = self.phase else {
            return Err(SessionError::InvalidPhase {
                operation: "finish",
                phase: self.phase,
            });
        };

        let (surviving, removed) = self.store.into_parts();
        Ok(Outcome {
            resolution,
            surviving,
            removed,
        })
    }

    fn commit(&self) -> Result<(), SessionError> {
        let file = self.store.to_record_file();

        format::encode_to_vec(&file.records)
            .and_then(|bytes| write_atomic(&self.path, &bytes, self.backup))
            .map_err(|source| SessionError::Commit {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!(
            "Wrote {} records to {} ({} removed)",
            file.len(),
            self.path.display(),
            self.store.removed().len()
        );
        Ok(())
    }

    fn expect(&self, phase: Phase, operation: &'static str) -> Result<(), SessionError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(SessionError::InvalidPhase {
                operation,
                phase: self.phase,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(records: Vec<Record>) -> EditSession {
        EditSession::from_file("/nonexistent/highscores.dat", RecordFile::new(records))
    }

    fn sample() -> Vec<Record> {
        vec![
            Record::new("A", "p", 10, 100),
            Record::new("B", "q", 20, 200),
            Record::new("A", "r", 30, 300),
        ]
    }

    #[test]
    fn test_confirmation_parse() {
        for yes in ["y", "Y", "yes", "YES", "Yes", " yEs "] {
            assert_eq!(Confirmation::parse(yes), Confirmation::Yes, "{yes:?}");
        }
        for no in ["", "n", "No", "NO", "yess", "maybe", "ye"] {
            assert_eq!(Confirmation::parse(no), Confirmation::No, "{no:?}");
        }
    }

    #[test]
    fn test_empty_file_goes_straight_to_done() {
        let mut session = session(Vec::new());
        assert_eq!(session.begin().unwrap(), Phase::Done(Resolution::NothingToDo));

        assert!(matches!(
            session.remove(b"A"),
            Err(SessionError::InvalidPhase { .. })
        ));
        assert!(matches!(
            session.confirm(Confirmation::Yes),
            Err(SessionError::InvalidPhase { .. })
        ));

        let outcome = session.finish().unwrap();
        assert!(!outcome.written());
        assert!(outcome.surviving.is_empty());
    }

    #[test]
    fn test_select_then_decline() {
        let mut session = session(sample());
        assert_eq!(session.begin().unwrap(), Phase::Selecting);

        assert_eq!(session.remove(b"A").unwrap(), Removal::Removed);
        assert_eq!(session.remove(b"Z").unwrap(), Removal::NoMatch);
        assert_eq!(session.surviving().len(), 2);
        assert_eq!(session.removed(), [Record::new("A", "p", 10, 100)]);

        assert_eq!(session.stop().unwrap(), Phase::Committing);
        assert_eq!(
            session.confirm(Confirmation::No).unwrap(),
            Phase::Done(Resolution::Discarded)
        );

        let outcome = session.finish().unwrap();
        assert_eq!(outcome.resolution, Resolution::Discarded);
        assert_eq!(outcome.removed.len(), 1);
    }

    #[test]
    fn test_stop_without_removals_discards() {
        let mut session = session(sample());
        session.begin().unwrap();
        assert_eq!(session.stop().unwrap(), Phase::Done(Resolution::Discarded));
        assert_eq!(session.finish().unwrap().surviving, sample());
    }

    #[test]
    fn test_exhausting_records_ends_selection() {
        let mut session = session(vec![Record::new("Only", "me", 1, 1)]);
        session.begin().unwrap();

        assert_eq!(session.remove(b"Only").unwrap(), Removal::Removed);
        assert_eq!(session.phase(), Phase::Committing);
        assert!(matches!(
            session.remove(b"Only"),
            Err(SessionError::InvalidPhase { .. })
        ));
        assert!(matches!(session.stop(), Err(SessionError::InvalidPhase { .. })));
    }

    #[test]
    fn test_finish_before_done_is_rejected() {
        let mut session = session(sample());
        session.begin().unwrap();
        match session.finish() {
            Err(SessionError::InvalidPhase { operation, phase }) => {
                assert_eq!(operation, "finish");
                assert_eq!(phase, Phase::Selecting);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_begin_twice_is_rejected() {
        let mut session = session(sample());
        session.begin().unwrap();
        let err = session.begin().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot begin selection while the session is selecting"
        );
    }
}
