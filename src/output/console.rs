//! Streaming console formatter
//!
//! This module provides `ConsoleFormatter`, which writes each tree line as
//! soon as the renderer produces it.

use std::io::{self, Write};

use crate::stats::RunSummary;
use crate::tree::{Connector, TreeOutput, format_size};

use super::config::OutputConfig;

/// ANSI SGR sequences used for tree entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub directory: &'static str,
    pub file: &'static str,
    pub reset: &'static str,
}

impl Palette {
    /// Bright green directories, bright white files.
    pub const ANSI: Palette = Palette {
        directory: "\x1b[92m",
        file: "\x1b[97m",
        reset: "\x1b[0m",
    };

    pub const PLAIN: Palette = Palette {
        directory: "",
        file: "",
        reset: "",
    };

    pub fn for_config(config: &OutputConfig) -> Self {
        if config.use_color {
            Self::ANSI
        } else {
            Self::PLAIN
        }
    }
}

/// Console formatter - writes lines straight to the underlying writer.
/// Implements the TreeOutput trait for use with TreeRenderer.
pub struct ConsoleFormatter<W: Write> {
    palette: Palette,
    out: W,
}

impl ConsoleFormatter<io::Stdout> {
    /// Formatter writing to standard output, which is line buffered.
    pub fn stdout(config: OutputConfig) -> Self {
        Self::new(config, io::stdout())
    }
}

impl<W: Write> ConsoleFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self {
            palette: Palette::for_config(&config),
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TreeOutput for ConsoleFormatter<W> {
    fn root_header(&mut self, path: &str, size: u64) -> io::Result<()> {
        let p = self.palette;
        writeln!(
            self.out,
            "{}{} ({}){}",
            p.directory,
            path,
            format_size(size),
            p.reset
        )
    }

    fn dir_header(&mut self, prefix: &str, name: &str, size: u64) -> io::Result<()> {
        let p = self.palette;
        writeln!(
            self.out,
            "{}{} {}{} ({}){}",
            prefix,
            Connector::Branch.glyph(),
            p.directory,
            name,
            format_size(size),
            p.reset
        )
    }

    fn file_line(
        &mut self,
        prefix: &str,
        connector: Connector,
        name: &str,
        size: u64,
    ) -> io::Result<()> {
        let p = self.palette;
        writeln!(
            self.out,
            "{}{} {}{} ({}){}",
            prefix,
            connector.glyph(),
            p.file,
            name,
            format_size(size),
            p.reset
        )
    }

    fn diagnostic(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)
    }

    fn finish(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Summarize:")?;
        writeln!(self.out, "Scanned paths: {}", summary.folders)?;
        writeln!(self.out, "Scanned files: {}", summary.files)?;
        writeln!(
            self.out,
            "Cost time: {:.2} s",
            summary.elapsed.as_secs_f64()
        )?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn formatter(use_color: bool) -> ConsoleFormatter<Vec<u8>> {
        ConsoleFormatter::new(OutputConfig { use_color }, Vec::new())
    }

    fn text(f: ConsoleFormatter<Vec<u8>>) -> String {
        String::from_utf8(f.into_inner()).unwrap()
    }

    #[test]
    fn test_root_header_colored() {
        let mut f = formatter(true);
        f.root_header("R", 1054).unwrap();
        assert_eq!(text(f), "\x1b[92mR (1.03 KB)\x1b[0m\n");
    }

    #[test]
    fn test_dir_header_always_uses_branch() {
        let mut f = formatter(true);
        f.dir_header("└── ", "sub", 1024).unwrap();
        assert_eq!(text(f), "└── ├── \x1b[92msub (1.00 KB)\x1b[0m\n");
    }

    #[test]
    fn test_file_line_colored() {
        let mut f = formatter(true);
        f.file_line("│   ", Connector::Last, "c.txt", 10).unwrap();
        assert_eq!(text(f), "│   └── \x1b[97mc.txt (10.00 B)\x1b[0m\n");
    }

    #[test]
    fn test_plain_output_has_no_escapes() {
        let mut f = formatter(false);
        f.root_header("R", 0).unwrap();
        f.file_line("", Connector::Branch, "a.txt", 10).unwrap();
        let out = text(f);
        assert_eq!(out, "R (0.00 B)\n├── a.txt (10.00 B)\n");
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_diagnostic_is_uncolored() {
        let mut f = formatter(true);
        f.diagnostic("Error reading directory x: denied").unwrap();
        assert_eq!(text(f), "Error reading directory x: denied\n");
    }

    #[test]
    fn test_finish_prints_summary() {
        let mut f = formatter(true);
        let summary = RunSummary {
            folders: 4,
            files: 12,
            elapsed: Duration::from_millis(1234),
        };
        f.finish(&summary).unwrap();
        assert_eq!(
            text(f),
            "\nSummarize:\nScanned paths: 4\nScanned files: 12\nCost time: 1.23 s\n"
        );
    }
}
