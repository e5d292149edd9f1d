//! Highscores format reader

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{self, BufRead};

use crate::error::{Field, FormatError};
use crate::record::{FORMAT_VERSION, Record, RecordFile};

/// Upper bound on capacity reserved up front from the untrusted record count.
const MAX_PREALLOCATED_RECORDS: usize = 1024;

/// Reader for the binary highscores format
pub struct BinaryReader<R: BufRead> {
    reader: R,
}

impl<R: BufRead> BinaryReader<R> {
    /// Create a new binary reader
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read the header and exactly as many records as it declares
    pub fn read_file(&mut self) -> Result<RecordFile, FormatError> {
        let version = self.read_header_u32()?;
        if version != FORMAT_VERSION {
            return Err(FormatError::UnsupportedVersion(version));
        }

        let count = self.read_header_u32()? as usize;
        let mut records = Vec::with_capacity(count.min(MAX_PREALLOCATED_RECORDS));

        for index in 0..count {
            records.push(self.read_record(index)?);
        }

        tracing::debug!(version, count, "Decoded highscores file");

        Ok(RecordFile { version, records })
    }

    /// Consume the reader and return the inner reader
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_header_u32(&mut self) -> Result<u32, FormatError> {
        self.reader
            .read_u32::<LittleEndian>()
            .map_err(|e| eof_as(e, FormatError::TruncatedHeader))
    }

    fn read_record(&mut self, index: usize) -> Result<Record, FormatError> {
        let name = self.read_terminated(Field::Name, index)?;
        let owner = self.read_terminated(Field::Owner, index)?;

        let score = self
            .reader
            .read_i32::<LittleEndian>()
            .map_err(|e| eof_as(e, truncated(Field::Score, index)))?;
        let timestamp = self
            .reader
            .read_i64::<LittleEndian>()
            .map_err(|e| eof_as(e, truncated(Field::Timestamp, index)))?;

        Ok(Record {
            name,
            owner,
            score,
            timestamp,
        })
    }

    /// Read up to and including the next NUL, returning the bytes before it.
    fn read_terminated(&mut self, field: Field, index: usize) -> Result<Vec<u8>, FormatError> {
        let mut value = Vec::new();
        self.reader.read_until(0, &mut value)?;

        // read_until stops at end-of-source without a delimiter
        if value.pop() != Some(0) {
            return Err(truncated(field, index));
        }

        Ok(value)
    }
}

fn truncated(field: Field, index: usize) -> FormatError {
    FormatError::TruncatedField { field, index }
}

/// A short read means end-of-source; anything else is a real I/O failure.
fn eof_as(err: io::Error, truncated: FormatError) -> FormatError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        truncated
    } else {
        FormatError::Io(err)
    }
}
