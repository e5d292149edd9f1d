//! Highscores format writer

use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{self, Write};

use crate::record::{FORMAT_VERSION, Record};

/// Writer for the binary highscores format
pub struct BinaryWriter<W: Write> {
    writer: W,
}

impl<W: Write> BinaryWriter<W> {
    /// Create a new binary writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a version 1 header followed by every record, in order
    pub fn write_records(&mut self, records: &[Record]) -> io::Result<()> {
        let count = u32::try_from(records.len()).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("too many records for u32 count: {}", records.len()),
            )
        })?;

        self.writer.write_u32::<LittleEndian>(FORMAT_VERSION)?;
        self.writer.write_u32::<LittleEndian>(count)?;

        for record in records {
            self.write_record(record)?;
        }

        tracing::debug!(count, "Encoded highscores file");
        Ok(())
    }

    fn write_record(&mut self, record: &Record) -> io::Result<()> {
        if !record.is_encodable() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "record '{}' contains a NUL byte in its name or owner",
                    String::from_utf8_lossy(&record.name)
                ),
            ));
        }

        self.writer.write_all(&record.name)?;
        self.writer.write_u8(0)?;
        self.writer.write_all(&record.owner)?;
        self.writer.write_u8(0)?;
        self.writer.write_i32::<LittleEndian>(record.score)?;
        self.writer.write_i64::<LittleEndian>(record.timestamp)?;
        Ok(())
    }

    /// Consume the writer and return the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_bytes() {
        let mut buffer = Vec::new();
        BinaryWriter::new(&mut buffer)
            .write_records(&[Record::new("AB", "c", -2, 0x0102)])
            .unwrap();

        let mut expected = vec![1, 0, 0, 0, 1, 0, 0, 0];
        expected.extend_from_slice(b"AB\0c\0");
        expected.extend_from_slice(&[0xFE, 0xFF, 0xFF, 0xFF]);
        expected.extend_from_slice(&[0x02, 0x01, 0, 0, 0, 0, 0, 0]);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_empty_writes_header_only() {
        let buffer = {
            let mut writer = BinaryWriter::new(Vec::new());
            writer.write_records(&[]).unwrap();
            writer.into_inner()
        };
        assert_eq!(buffer, [1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_rejects_embedded_nul() {
        let records = [Record::new(b"bad\0name".to_vec(), "p", 1, 1)];
        let err = BinaryWriter::new(Vec::new()).write_records(&records).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
