//! Minimal CSV output for the validation datasets
//!
//! Every column is either numeric or a bare identifier, so rows need no
//! quoting or escaping; values are written with their shortest round-trip
//! formatting.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// A dataset row that knows its column names and cell values.
pub trait Record {
    fn header() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

/// Render records as CSV text, header first.
pub fn to_csv<R: Record>(records: &[R]) -> String {
    let mut out = String::new();
    out.push_str(&R::header().join(","));
    out.push('\n');
    for record in records {
        out.push_str(&record.cells().join(","));
        out.push('\n');
    }
    out
}

/// Write records as a CSV file at `path`.
pub fn write_csv<R: Record>(path: &Path, records: &[R]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(to_csv(records).as_bytes())?;
    writer.flush()
}
