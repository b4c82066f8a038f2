// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{Result, SheetError};

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        let err = std::io::Error::other("path exists but is not a directory");
        return Err(SheetError::io(dir, err));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| SheetError::io(dir, e))?;
    }
    Ok(())
}

/// Sibling temp path: `out/sheet.pdf` -> `out/.sheet.pdf.tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

/// Write the whole file or nothing: data goes to a sibling temp file that is
/// renamed over `path` once fully written.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let tmp = temp_path(path);
    if let Err(e) = fs::write(&tmp, bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(SheetError::io(&tmp, e));
    }
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        SheetError::io(path, e)
    })
}
