//! In-memory record store for an edit session.
//!
//! Records are partitioned into `surviving` (will be written back) and
//! `removed` (pending removal). Moving a record is one-way: `removed` is only
//! ever appended to.

use crate::record::{Record, RecordFile};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    surviving: Vec<Record>,
    removed: Vec<Record>,
}

impl RecordStore {
    /// Start a store with every record surviving, in file order.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            surviving: records,
            removed: Vec::new(),
        }
    }

    pub fn surviving(&self) -> &[Record] {
        &self.surviving
    }

    pub fn removed(&self) -> &[Record] {
        &self.removed
    }

    /// True when there is nothing left to remove.
    pub fn is_exhausted(&self) -> bool {
        self.surviving.is_empty()
    }

    pub fn has_pending_removals(&self) -> bool {
        !self.removed.is_empty()
    }

    /// Move the first surviving record named `target` to the end of `removed`.
    ///
    /// Returns false and changes nothing if no surviving record matches.
    pub fn remove_first_by_name(&mut self, target: &[u8]) -> bool {
        match self.surviving.iter().position(|r| r.name == target) {
            Some(index) => {
                let record = self.surviving.remove(index);
                self.removed.push(record);
                true
            }
            None => false,
        }
    }

    /// Build the file that a commit writes: the survivors at the current version.
    pub fn to_record_file(&self) -> RecordFile {
        RecordFile::new(self.surviving.clone())
    }

    /// Split into `(surviving, removed)`.
    pub fn into_parts(self) -> (Vec<Record>, Vec<Record>) {
        (self.surviving, self.removed)
    }
}

impl From<RecordFile> for RecordStore {
    fn from(file: RecordFile) -> Self {
        Self::new(file.records)
    }
}
