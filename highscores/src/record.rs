//! Highscore record types
//!
//! A [`Record`] is one completed scenario. Field values are raw bytes as
//! stored on disk; no text encoding is assumed here.

/// The only `highscores.dat` layout version this crate understands.
pub const FORMAT_VERSION: u32 = 1;

/// One scenario completion entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    /// Scenario name (NUL-terminated on disk, terminator excluded)
    pub name: Vec<u8>,
    /// Name of the player who completed the scenario
    pub owner: Vec<u8>,
    /// Company value at completion (`money32`)
    pub score: i32,
    /// Completion time
    pub timestamp: i64,
}

impl Record {
    /// Create a new record.
    pub fn new(
        name: impl Into<Vec<u8>>,
        owner: impl Into<Vec<u8>>,
        score: i32,
        timestamp: i64,
    ) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            score,
            timestamp,
        }
    }

    /// Returns true if both string fields can be written without losing data.
    ///
    /// A NUL byte inside `name` or `owner` would be read back as the field
    /// terminator.
    pub fn is_encodable(&self) -> bool {
        !self.name.contains(&0) && !self.owner.contains(&0)
    }
}

/// A decoded `highscores.dat` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFile {
    pub version: u32,
    pub records: Vec<Record>,
}

impl RecordFile {
    /// Create a file at the current format version.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            version: FORMAT_VERSION,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for RecordFile {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
