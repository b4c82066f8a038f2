// src/progress.rs
use log::{debug, info};

/// Lightweight progress reporting for the collect and render passes.
/// Frontends implement this to surface status; every hook defaults to a no-op.
pub trait Progress {
    /// Called at the start with the total number of items.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one card is drawn (0-based position in the sheet).
    fn item_done(&mut self, _index: usize) {}

    /// Called at the end of a successful pass.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Forwards progress to the logger: status lines at info, per-card ticks at debug.
#[derive(Default)]
pub struct LogProgress {
    total: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        info!("Rendering {total} cards");
    }

    fn log(&mut self, msg: &str) {
        info!("{msg}");
    }

    fn item_done(&mut self, index: usize) {
        debug!("card {}/{}", index + 1, self.total);
    }
}
