// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod log;

pub mod collect;
pub mod file;
pub mod progress;
pub mod record;
pub mod runner;
pub mod sheet;
pub mod store;

pub use error::{Result, SheetError};
pub use record::Record;
