//! sizetree - a tree command that shows how big every file and directory is

pub mod error;
pub mod output;
pub mod stats;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ScanError, SizeParseError};
pub use output::{ConsoleFormatter, OutputConfig, Palette};
pub use stats::RunSummary;
pub use tree::{
    Connector, EntryFilter, ScanConfig, SizeCache, TreeOutput, TreeRenderer, format_size,
    parse_size,
};
