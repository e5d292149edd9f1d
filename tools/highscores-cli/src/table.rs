//! Scenario table rendering
//!
//! Widths are measured from whatever records are being shown, so the table
//! stays aligned as records move between sections.

use std::io::{self, Write};

use highscores_core::Record;

/// Left-aligned column widths, in characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    pub name: usize,
    pub owner: usize,
    pub score: usize,
    pub timestamp: usize,
}

impl Columns {
    /// Widest value of each field across `records`.
    pub fn measure<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        records.into_iter().fold(Self::default(), |widths, r| Self {
            name: widths.name.max(text(&r.name).chars().count()),
            owner: widths.owner.max(text(&r.owner).chars().count()),
            score: widths.score.max(r.score.to_string().len()),
            timestamp: widths.timestamp.max(r.timestamp.to_string().len()),
        })
    }
}

/// Bytes shown as text, replacing invalid UTF-8.
pub fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

pub fn format_row(record: &Record, columns: &Columns) -> String {
    format!(
        "{:<name$} by {:<owner$} score: {:<score$} at {:<timestamp$}",
        text(&record.name),
        text(&record.owner),
        record.score,
        record.timestamp,
        name = columns.name,
        owner = columns.owner,
        score = columns.score,
        timestamp = columns.timestamp,
    )
}

pub fn write_rows<W: Write>(out: &mut W, records: &[Record], columns: &Columns) -> io::Result<()> {
    for record in records {
        writeln!(out, "{}", format_row(record, columns))?;
    }
    Ok(())
}

/// Print both sections of an edit in progress.
pub fn render<W: Write>(out: &mut W, surviving: &[Record], removed: &[Record]) -> io::Result<()> {
    let columns = Columns::measure(surviving.iter().chain(removed));

    writeln!(out, " -- remaining scenarios: ")?;
    write_rows(out, surviving, &columns)?;
    writeln!(out, " -- scenarios pending removal: ")?;
    write_rows(out, removed, &columns)?;
    writeln!(out, " -- ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        vec![
            Record::new("Forest Frontiers", "Al", 5, 1_600_000_000),
            Record::new("Dunes", "Bartholomew", -120_000, 7),
        ]
    }

    #[test]
    fn test_measure() {
        let columns = Columns::measure(&records());
        assert_eq!(
            columns,
            Columns {
                name: 16,
                owner: 11,
                score: 7,
                timestamp: 10,
            }
        );
        assert_eq!(Columns::measure(&[]), Columns::default());
    }

    #[test]
    fn test_measure_counts_characters() {
        let columns = Columns::measure(&[Record::new("Café", "Zoë", 0, 0)]);
        assert_eq!(columns.name, 4);
        assert_eq!(columns.owner, 3);
    }

    #[test]
    fn test_rows_are_aligned() {
        let records = records();
        let columns = Columns::measure(&records);

        assert_eq!(
            format_row(&records[0], &columns),
            "Forest Frontiers by Al          score: 5       at 1600000000"
        );
        assert_eq!(
            format_row(&records[1], &columns),
            "Dunes            by Bartholomew score: -120000 at 7         "
        );
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        assert_eq!(text(&[b'A', 0xFF]), "A\u{FFFD}");
    }

    #[test]
    fn test_render_sections() {
        let records = records();
        let mut out = Vec::<u8>::new();
        render(&mut out, &records[..1], &records[1..]).unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], " -- remaining scenarios: ");
        assert!(lines[1].starts_with("Forest Frontiers by Al "));
        assert_eq!(lines[2], " -- scenarios pending removal: ");
        assert!(lines[3].starts_with("Dunes            by Bartholomew"));
        assert_eq!(lines[4], " -- ");
    }
}
