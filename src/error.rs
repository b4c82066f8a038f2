// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<reqwest::Error>,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid selector {0}")]
    Selector(String),

    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("invalid sheet geometry: {0}")]
    InvalidGeometry(String),
}

impl SheetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SheetError::Io { path: path.into(), source }
    }

    pub(crate) fn http(url: &str, source: reqwest::Error) -> Self {
        SheetError::Http { url: url.to_string(), source: Box::new(source) }
    }
}

pub type Result<T> = std::result::Result<T, SheetError>;
