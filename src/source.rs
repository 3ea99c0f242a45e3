//! Job source: reads target URLs from a CSV file
//!
//! The file has no header row; the URL is the first column and any further
//! columns are ignored. An unreadable file or a malformed row aborts the run
//! before any probing starts.

use std::path::Path;

use crate::error::{Error, Result};

/// Read the ordered list of target URLs from a CSV file
pub fn read_targets(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::source(format!("cannot open {}: {e}", path.display())))?;

    let mut targets = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| Error::source(format!("malformed row: {e}")))?;
        let url = record
            .get(0)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| Error::source(format!("row {} missing URL column", targets.len() + 1)))?;
        targets.push(url.to_string());
    }

    Ok(targets)
}
