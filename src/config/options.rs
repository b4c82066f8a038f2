// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use super::sheet::SheetConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectOptions {
    pub source_url: String,
    pub out_path: PathBuf,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            source_url: SOURCE_URL.to_string(),
            out_path: PathBuf::from(DATA_FILE),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub data_path: PathBuf,
    pub out_path: PathBuf,
    /// Prefix of the derived artwork URL, `<slug>.jpg` is appended.
    pub artwork_base: String,
    pub sheet: SheetConfig,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DATA_FILE),
            out_path: PathBuf::from(SHEET_FILE),
            artwork_base: ARTWORK_BASE.to_string(),
            sheet: SheetConfig::default(),
        }
    }
}
