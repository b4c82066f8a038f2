// src/store.rs
use std::{fs, path::Path};

use crate::error::{Result, SheetError};
use crate::file::write_atomic;
use crate::record::Record;

/// Overwrite `path` with the records as a pretty-printed JSON array.
pub fn save_records(path: &Path, records: &[Record]) -> Result<()> {
    let mut json = serde_json::to_vec_pretty(records)
        .map_err(|source| SheetError::Json { path: path.to_path_buf(), source })?;
    json.push(b'\n');
    write_atomic(path, &json)
}

/// Read the data file written by the collector, in file order.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let text = fs::read_to_string(path).map_err(|e| SheetError::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| SheetError::Json { path: path.to_path_buf(), source })
}
