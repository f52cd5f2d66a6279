//! Entry filtering by extension and size range

use std::collections::HashSet;

use super::config::ScanConfig;
use super::utils::normalize_extension;

/// Decides which entries are printed.
///
/// Files go through both the extension lists and the size range.
/// Directories only go through the size range, using their aggregate size.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    include: HashSet<String>,
    exclude: HashSet<String>,
    min_size: Option<u64>,
    max_size: Option<u64>,
}

impl EntryFilter {
    /// Build a filter from the extension lists in `config` and already
    /// resolved size bounds.
    pub fn new(config: &ScanConfig, min_size: Option<u64>, max_size: Option<u64>) -> Self {
        Self {
            include: config
                .include_exts
                .iter()
                .map(|e| normalize_extension(e))
                .collect(),
            exclude: config
                .exclude_exts
                .iter()
                .map(|e| normalize_extension(e))
                .collect(),
            min_size,
            max_size,
        }
    }

    /// Check a lower-cased extension against the include and exclude lists.
    pub fn admits_extension(&self, ext: &str) -> bool {
        !self.exclude.contains(ext) && (self.include.is_empty() || self.include.contains(ext))
    }

    /// Check a size against the configured range (both ends inclusive).
    pub fn admits_size(&self, size: u64) -> bool {
        self.min_size.is_none_or(|min| size >= min) && self.max_size.is_none_or(|max| size <= max)
    }

    pub fn admits_file(&self, ext: &str, size: u64) -> bool {
        self.admits_extension(ext) && self.admits_size(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(include: &[&str], exclude: &[&str]) -> ScanConfig {
        ScanConfig {
            include_exts: include.iter().map(|s| s.to_string()).collect(),
            exclude_exts: exclude.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_filter_admits_everything() {
        let filter = EntryFilter::default();
        assert!(filter.admits_file("", 0));
        assert!(filter.admits_file("png", u64::MAX));
        assert!(filter.admits_size(12345));
    }

    #[test]
    fn test_include_list() {
        let filter = EntryFilter::new(&config_with(&["go", "MD"], &[]), None, None);
        assert!(filter.admits_file("go", 10));
        assert!(filter.admits_file("md", 10));
        assert!(!filter.admits_file("png", 10));
        assert!(!filter.admits_file("", 10));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let filter = EntryFilter::new(&config_with(&["go"], &["go"]), None, None);
        assert!(!filter.admits_file("go", 10));
    }

    #[test]
    fn test_exclude_list() {
        let filter = EntryFilter::new(&config_with(&[], &[".log"]), None, None);
        assert!(!filter.admits_file("log", 10));
        assert!(filter.admits_file("txt", 10));
        assert!(filter.admits_file("", 10));
    }

    #[test]
    fn test_size_range_is_inclusive() {
        let filter = EntryFilter::new(&ScanConfig::default(), Some(100), Some(200));
        assert!(!filter.admits_size(99));
        assert!(filter.admits_size(100));
        assert!(filter.admits_size(200));
        assert!(!filter.admits_size(201));
    }

    #[test]
    fn test_zero_bounds_from_bad_tokens() {
        // An unparseable token resolves to 0
        let min_zero = EntryFilter::new(&ScanConfig::default(), Some(0), None);
        assert!(min_zero.admits_size(0));
        assert!(min_zero.admits_size(1 << 40));

        let max_zero = EntryFilter::new(&ScanConfig::default(), None, Some(0));
        assert!(max_zero.admits_size(0));
        assert!(!max_zero.admits_size(1));
    }

    #[test]
    fn test_filter_monotonicity() {
        let sizes = [0u64, 1, 99, 100, 150, 200, 201, 10_000];
        let exts = ["", "go", "md", "png", "txt"];

        let loose = EntryFilter::new(&config_with(&[], &["png"]), Some(50), Some(500));
        let tighter_exclude = EntryFilter::new(&config_with(&[], &["png", "md"]), Some(50), Some(500));
        let tighter_range = EntryFilter::new(&config_with(&[], &["png"]), Some(100), Some(200));

        for ext in exts {
            for size in sizes {
                if tighter_exclude.admits_file(ext, size) {
                    assert!(loose.admits_file(ext, size), "{ext} {size}");
                }
                if tighter_range.admits_file(ext, size) {
                    assert!(loose.admits_file(ext, size), "{ext} {size}");
                }
            }
        }
    }
}
