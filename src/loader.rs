//! CSV input loading.
use crate::records::InputRecord;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load every row of the CSV export at `path`, in file order.
pub fn load_input_records(path: &Path) -> Result<Vec<InputRecord>> {
    let file =
        File::open(path).with_context(|| format!("open input file {}", path.display()))?;
    let records = read_input_records(file)
        .with_context(|| format!("decode CSV rows from {}", path.display()))?;
    tracing::info!(
        count = records.len(),
        path = %path.display(),
        "loaded games from input file"
    );
    Ok(records)
}

/// Decode header-matched rows from any reader.
pub fn read_input_records<R: Read>(reader: R) -> Result<Vec<InputRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, row) in csv_reader.deserialize::<InputRecord>().enumerate() {
        // +2: one for the header row, one for 1-based line numbers.
        let record = row.with_context(|| format!("decode CSV line {}", idx + 2))?;
        records.push(record);
    }
    Ok(records)
}
