//! Configuration types for the tree renderer

use std::path::PathBuf;

/// Configuration for a single scan. Immutable for the duration of a run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root_path: PathBuf,
    /// Deepest directory level whose header is printed (root is 0).
    /// `None` descends without limit.
    pub max_depth: Option<usize>,
    /// Extensions to show; empty means no include filter
    pub include_exts: Vec<String>,
    pub exclude_exts: Vec<String>,
    /// Raw size tokens, e.g. "10KB". Parsed when the run starts.
    pub min_size: Option<String>,
    pub max_size: Option<String>,
    /// Print directories only; files are neither counted nor shown
    pub only_path: bool,
}

impl ScanConfig {
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            ..Default::default()
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("."),
            max_depth: None,
            include_exts: Vec::new(),
            exclude_exts: Vec::new(),
            min_size: None,
            max_size: None,
            only_path: false,
        }
    }
}
