// src/runner.rs
use std::path::PathBuf;

use log::info;

use crate::{
    collect::collect,
    config::{CollectOptions, RenderOptions},
    core::net::{ByteFetcher, DocumentSource},
    error::Result,
    file::write_atomic,
    progress::Progress,
    sheet::render_sheet,
    store::{load_records, save_records},
};

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub records: usize,
    pub pages: usize,
    pub images_skipped: usize,
}

/// Scrape the listing page and overwrite the data file.
/// Nothing is written when the fetch fails.
pub fn run_collect(
    opts: &CollectOptions,
    source: &dyn DocumentSource,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Collecting from {}", opts.source_url));
    }

    let records = collect(source, &opts.source_url)?;
    save_records(&opts.out_path, &records)?;
    info!("Saved to {}", opts.out_path.display());

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(RunSummary {
        files_written: vec![opts.out_path.clone()],
        records: records.len(),
        pages: 0,
        images_skipped: 0,
    })
}

/// Read the data file, draw the sheet, write the PDF once at the end.
pub fn run_render(
    opts: &RenderOptions,
    fetcher: &dyn ByteFetcher,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let records = load_records(&opts.data_path)?;
    let count = records.len();
    info!("Loaded {count} records from {}", opts.data_path.display());

    let sheet = render_sheet(records, fetcher, &opts.sheet, &opts.artwork_base, progress)?;
    write_atomic(&opts.out_path, &sheet.bytes)?;

    let report = &sheet.report;
    info!(
        "{} images embedded, {} skipped across {} pages",
        report.embedded(),
        report.skipped(),
        report.pages
    );
    info!("PDF saved as {}", opts.out_path.display());

    Ok(RunSummary {
        files_written: vec![opts.out_path.clone()],
        records: count,
        pages: report.pages,
        images_skipped: report.skipped(),
    })
}
