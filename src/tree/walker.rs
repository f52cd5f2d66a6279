//! TreeRenderer - walks a directory and streams an annotated tree

use std::io;
use std::path::Path;
use std::time::Instant;

use log::{debug, info, trace};

use crate::error::ScanError;
use crate::stats::RunSummary;

use super::cache::SizeCache;
use super::config::ScanConfig;
use super::filter::EntryFilter;
use super::utils::{
    Connector, child_prefix, display_name, extension_of, parse_size, read_sorted_entries,
};

/// Callback for streaming output - receives every line the renderer produces.
pub trait TreeOutput {
    /// Header for the root directory, shown with the path as given.
    fn root_header(&mut self, path: &str, size: u64) -> io::Result<()>;

    /// Header for a nested directory. `prefix` already ends with the
    /// parent's connector.
    fn dir_header(&mut self, prefix: &str, name: &str, size: u64) -> io::Result<()>;

    fn file_line(
        &mut self,
        prefix: &str,
        connector: Connector,
        name: &str,
        size: u64,
    ) -> io::Result<()>;

    /// A non-fatal problem, shown inline with the tree.
    fn diagnostic(&mut self, message: &str) -> io::Result<()>;

    fn finish(&mut self, summary: &RunSummary) -> io::Result<()>;
}

/// Depth-limited renderer that annotates every entry with its size.
///
/// Owns the size cache and the run counters; both live for one call to
/// [`run`](Self::run). Only write failures on the output abort a run,
/// filesystem errors become diagnostics.
pub struct TreeRenderer<O: TreeOutput> {
    config: ScanConfig,
    output: O,
    cache: SizeCache,
    filter: EntryFilter,
    summary: RunSummary,
}

impl<O: TreeOutput> TreeRenderer<O> {
    pub fn new(config: ScanConfig, output: O) -> Self {
        Self {
            config,
            output,
            cache: SizeCache::new(),
            filter: EntryFilter::default(),
            summary: RunSummary::new(),
        }
    }

    /// Render the configured root and print the summary.
    pub fn run(&mut self) -> io::Result<RunSummary> {
        let start = Instant::now();
        let root = self.config.root_path.clone();
        info!("scanning {}", root.display());

        self.cache = SizeCache::new();
        self.summary = RunSummary::new();

        let min_size = self.resolve_bound(self.config.min_size.clone())?;
        let max_size = self.resolve_bound(self.config.max_size.clone())?;
        self.filter = EntryFilter::new(&self.config, min_size, max_size);

        self.render_dir(&root, "", 0)?;

        self.summary.elapsed = start.elapsed();
        self.output.finish(&self.summary)?;
        info!(
            "scanned {} directories and {} files in {:?} ({} walks)",
            self.summary.folders,
            self.summary.files,
            self.summary.elapsed,
            self.cache.walks()
        );
        Ok(self.summary.clone())
    }

    pub fn cache(&self) -> &SizeCache {
        &self.cache
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Parse a configured size token. A bad token is reported and treated as 0.
    fn resolve_bound(&mut self, token: Option<String>) -> io::Result<Option<u64>> {
        let Some(token) = token else {
            return Ok(None);
        };
        match parse_size(&token) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) => {
                debug!("{}", e);
                self.output.diagnostic(&e.to_string())?;
                Ok(Some(0))
            }
        }
    }

    /// Aggregate size of `path`, reporting a failed walk and counting it as 0.
    fn aggregate(&mut self, path: &Path) -> io::Result<u64> {
        match self.cache.aggregate(path) {
            Ok(size) => Ok(size),
            Err(e) => {
                debug!("{}", e);
                self.output.diagnostic(&e.to_string())?;
                Ok(0)
            }
        }
    }

    fn render_dir(&mut self, path: &Path, prefix: &str, depth: usize) -> io::Result<()> {
        if self.config.max_depth.is_some_and(|max| depth > max) {
            return Ok(());
        }

        let total = self.aggregate(path)?;
        if prefix.is_empty() {
            self.output.root_header(&path.display().to_string(), total)?;
        } else {
            self.output.dir_header(prefix, &display_name(path), total)?;
        }

        let prefix = child_prefix(prefix);

        let entries = match read_sorted_entries(path) {
            Ok(entries) => entries,
            Err(source) => {
                let e = ScanError::ReadDir {
                    path: path.to_path_buf(),
                    source,
                };
                debug!("{}", e);
                return self.output.diagnostic(&e.to_string());
            }
        };

        let count = entries.len();
        for (index, entry) in entries.into_iter().enumerate() {
            // Skipped entries still take up their position
            let connector = Connector::for_position(index, count);
            let entry_path = entry.path();

            // Symlinks are not followed and fall through to the file branch
            let Ok(file_type) = entry.file_type() else {
                continue;
            };

            if file_type.is_dir() {
                self.summary.record_folder();
                let size = self.aggregate(&entry_path)?;
                if self.filter.admits_size(size) {
                    let next_prefix = format!("{}{} ", prefix, connector.glyph());
                    self.render_dir(&entry_path, &next_prefix, depth + 1)?;
                }
                continue;
            }

            if self.config.only_path {
                continue;
            }
            self.summary.record_file();

            let size = match entry.metadata() {
                Ok(meta) => {
                    if meta.is_symlink() {
                        trace!("listing symlink {} without following", entry_path.display());
                    }
                    meta.len()
                }
                Err(source) => {
                    let e = ScanError::Metadata {
                        path: entry_path,
                        source,
                    };
                    debug!("{}", e);
                    self.output.diagnostic(&e.to_string())?;
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().to_string();
            if self.filter.admits_file(&extension_of(&name), size) {
                self.output.file_line(&prefix, connector, &name, size)?;
            }
        }

        Ok(())
    }
}
