// src/bin/render.rs
use std::path::Path;

use dex_sheet::config::{RenderOptions, consts::{LOG_FILE, STORE_DIR}};
use dex_sheet::core::HttpClient;
use dex_sheet::progress::LogProgress;
use dex_sheet::runner::run_render;
use log::error;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dex_sheet::log::init(Some(&Path::new(STORE_DIR).join(LOG_FILE)))?;

    let opts = RenderOptions::default();
    let client = HttpClient::new()?;
    let mut progress = LogProgress::default();

    // Per-image failures are already logged and never end up here
    run_render(&opts, &client, Some(&mut progress)).inspect_err(|e| error!("{e}"))?;
    Ok(())
}
