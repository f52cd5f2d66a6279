//! Memoized directory size aggregation

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use log::{debug, trace};

use crate::error::ScanError;

/// Aggregate sizes of directories seen during a run, keyed by the path as
/// given (not canonicalized).
///
/// Only successful walks are stored. A failed walk is retried the next
/// time the same path is asked for.
#[derive(Debug, Default)]
pub struct SizeCache {
    sizes: HashMap<PathBuf, u64>,
    walks: usize,
}

impl SizeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total size of every regular file beneath `path`.
    pub fn aggregate(&mut self, path: &Path) -> Result<u64, ScanError> {
        if let Some(&size) = self.sizes.get(path) {
            trace!("size cache hit: {}", path.display());
            return Ok(size);
        }

        self.walks += 1;
        let total = walk_total(path)?;
        debug!("aggregated {} bytes under {}", total, path.display());
        self.sizes.insert(path.to_path_buf(), total);
        Ok(total)
    }

    /// Cached size for `path`, if it has been aggregated successfully.
    pub fn get(&self, path: &Path) -> Option<u64> {
        self.sizes.get(path).copied()
    }

    /// Number of filesystem walks performed so far.
    pub fn walks(&self) -> usize {
        self.walks
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

/// Depth-first walk summing regular file sizes. Stops at the first error.
fn walk_total(path: &Path) -> Result<u64, ScanError> {
    let walker = WalkBuilder::new(path)
        .hidden(false)
        .ignore(false)
        .parents(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .follow_links(false)
        .build();

    let mut total = 0u64;
    for entry in walker {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: path.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let len = entry
            .metadata()
            .map_err(|source| ScanError::Walk {
                path: path.to_path_buf(),
                source,
            })?
            .len();
        total += len;
    }

    Ok(total)
}
