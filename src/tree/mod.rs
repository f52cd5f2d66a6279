//! Directory tree walking logic
//!
//! `TreeRenderer` walks a directory depth-first and streams one line per
//! entry to a `TreeOutput`, annotating every entry with its size. Directory
//! sizes come from a per-run `SizeCache`.

mod cache;
mod config;
mod filter;
mod utils;
mod walker;

// Re-export public types
pub use cache::SizeCache;
pub use config::ScanConfig;
pub use filter::EntryFilter;
pub use utils::{
    Connector, child_prefix, extension_of, format_size, normalize_extension, parse_size,
};
pub use walker::{TreeOutput, TreeRenderer};
