// src/config/mod.rs

pub mod consts;
pub mod options;
pub mod sheet;

pub use options::{CollectOptions, RenderOptions};
pub use sheet::SheetConfig;
