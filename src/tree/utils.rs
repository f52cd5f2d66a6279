//! Shared utility functions for tree walking

use std::fs::DirEntry;
use std::io;
use std::path::Path;

use crate::error::SizeParseError;

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;
const TB: u64 = GB * 1024;

/// Units accepted in size tokens, longest suffixes first.
const TOKEN_UNITS: [(&str, u64); 4] = [("KB", KB), ("MB", MB), ("GB", GB), ("TB", TB)];

/// Branch glyph drawn in front of a child entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// `├──`, more siblings follow
    Branch,
    /// `└──`, last entry of its directory
    Last,
}

impl Connector {
    /// Pick the connector for the entry at `index` out of `count` listed entries.
    pub fn for_position(index: usize, count: usize) -> Self {
        if index + 1 == count {
            Connector::Last
        } else {
            Connector::Branch
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Connector::Branch => "├──",
            Connector::Last => "└──",
        }
    }
}

/// Turn the prefix a directory header was drawn with into the prefix used by
/// its children: every `├──` becomes a `│  ` continuation and every `└──`
/// becomes blank.
pub fn child_prefix(prefix: &str) -> String {
    prefix.replace("├──", "│  ").replace("└──", "   ")
}

/// Format a size in bytes as `"{value:.2} {unit}"` using binary units.
pub fn format_size(bytes: u64) -> String {
    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.2} B", bytes as f64)
    }
}

/// Parse a size token like "10KB", "1 mb" or "512B" into bytes.
///
/// Whitespace anywhere in the token is ignored and the unit is
/// case-insensitive. The number may be fractional; the result is rounded
/// down to a whole byte count.
pub fn parse_size(token: &str) -> Result<u64, SizeParseError> {
    let normalized: String = token
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    if normalized.is_empty() {
        return Err(SizeParseError::Empty);
    }

    let (number, multiplier) =
        split_unit(&normalized).ok_or_else(|| SizeParseError::UnknownUnit {
            token: token.to_string(),
        })?;

    let invalid = || SizeParseError::InvalidNumber {
        token: token.to_string(),
        number: number.to_string(),
    };
    let value: f64 = number.parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }

    Ok((value * multiplier as f64).floor() as u64)
}

/// Split a normalized token into its number part and unit multiplier.
fn split_unit(token: &str) -> Option<(&str, u64)> {
    for (suffix, multiplier) in TOKEN_UNITS {
        if let Some(number) = token.strip_suffix(suffix) {
            return Some((number, multiplier));
        }
    }

    // A bare "B" only counts as a unit when it follows the number directly
    let number = token.strip_suffix('B')?;
    number
        .ends_with(|c: char| c.is_ascii_digit() || c == '.')
        .then_some((number, 1))
}

/// Lower-cased extension of a file name without the leading dot.
/// Empty if the name has no dot.
pub fn extension_of(name: &str) -> String {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

/// Normalize a user-supplied extension: trimmed, no leading dot, lower case.
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

/// Name shown for a nested directory header, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read the immediate entries of a directory, sorted by file name.
/// Entries that fail to read individually are dropped.
pub fn read_sorted_entries(path: &Path) -> io::Result<Vec<DirEntry>> {
    let mut entries: Vec<_> = std::fs::read_dir(path)?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|a| a.file_name());
    Ok(entries)
}
