//! Run summary counters
//!
//! Accumulates how many directories and files a scan encountered and how
//! long it took. Counts are taken before filtering.

use std::time::Duration;

/// Counters for one run, shared by every level of the recursion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Directory entries encountered beneath the root
    pub folders: usize,
    /// Regular-file entries encountered beneath the root
    pub files: usize,
    /// Wall-clock time of the whole run
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_folder(&mut self) {
        self.folders += 1;
    }

    pub fn record_file(&mut self) {
        self.files += 1;
    }
}
