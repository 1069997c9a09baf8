use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::dates::format_iso_date;
use crate::record::{MetaRow, SpeechRow};

pub const SPEECHES_HEADER: [&str; 2] = ["DocID", "text"];
pub const METADATA_HEADER: [&str; 8] = [
    "id",
    "date",
    "house",
    "member",
    "party",
    "debate_type",
    "heading",
    "file",
];

/// Write the two-column speeches table: UTF-8, tab-separated, header row,
/// full overwrite of the target file.
pub fn write_speeches(path: &Path, rows: &[SpeechRow]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().delimiter(b'\t').from_path(path)?;
    w.write_record(SPEECHES_HEADER)?;
    for row in rows {
        w.write_record([row.id.as_str(), row.text.as_str()])?;
    }
    w.flush()?;
    Ok(())
}

/// Write the eight-column metadata table, row-for-row parallel to the
/// speeches table written from the same run.
pub fn write_metadata(path: &Path, rows: &[MetaRow]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().delimiter(b'\t').from_path(path)?;
    w.write_record(METADATA_HEADER)?;
    for row in rows {
        let date = format_iso_date(row.date);
        let file = row.file.to_string_lossy();
        w.write_record([
            row.id.as_str(),
            date.as_str(),
            row.house.as_str(),
            row.member.as_str(),
            row.party.as_str(),
            row.debate_type.as_str(),
            row.heading.as_str(),
            file.as_ref(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Read a speeches table back into rows, skipping the header.
pub fn read_speeches(path: &Path) -> anyhow::Result<Vec<SpeechRow>> {
    let mut rdr = ReaderBuilder::new().delimiter(b'\t').from_path(path)?;
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(SpeechRow::new(
            record.get(0).unwrap_or_default(),
            record.get(1).unwrap_or_default(),
        ));
    }
    Ok(rows)
}
