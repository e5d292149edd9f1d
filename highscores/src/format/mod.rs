//! Binary highscores format (`highscores.dat`)
//!
//! All integers are little-endian regardless of host. Strings are raw bytes
//! terminated by a single NUL.
//!
//! # Layout
//! ```text
//! 0x00: version u32 (must be 1)
//! 0x04: count u32
//! then `count` records:
//!   name       bytes, NUL-terminated
//!   owner      bytes, NUL-terminated
//!   score      i32
//!   timestamp  i64
//! ```

mod reader;
mod writer;

pub use reader::BinaryReader;
pub use writer::BinaryWriter;

use std::io::{self, BufRead, Write};

use crate::error::FormatError;
use crate::record::{Record, RecordFile};

/// Decode a complete highscores file from `reader`.
///
/// Bytes after the last declared record are left unread.
pub fn decode<R: BufRead>(reader: R) -> Result<RecordFile, FormatError> {
    BinaryReader::new(reader).read_file()
}

/// Encode `records` as a version 1 highscores file into `writer`.
pub fn encode<W: Write>(records: &[Record], writer: W) -> io::Result<()> {
    BinaryWriter::new(writer).write_records(records)
}

/// Encode `records` into a freshly allocated buffer.
pub fn encode_to_vec(records: &[Record]) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(encoded_len(records));
    encode(records, &mut buffer)?;
    Ok(buffer)
}

/// Exact number of bytes [`encode`] produces for `records`.
pub fn encoded_len(records: &[Record]) -> usize {
    const HEADER: usize = 8;
    const FIXED_PER_RECORD: usize = 2 + 4 + 8;

    HEADER
        + records
            .iter()
            .map(|r| r.name.len() + r.owner.len() + FIXED_PER_RECORD)
            .sum::<usize>()
}
