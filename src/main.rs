//! CLI entry point for sizetree

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use log::{LevelFilter, debug, error};
use sizetree::{ConsoleFormatter, OutputConfig, ScanConfig, TreeRenderer};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Always use colors
    #[default]
    Always,
    /// Auto-detect based on terminal and environment
    Auto,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sizetree")]
#[command(about = "Print a directory tree with the size of every file and directory")]
#[command(version)]
struct Args {
    /// The starting path, defaults to the current directory
    #[arg(value_name = "PATH", conflicts_with = "path")]
    root: Option<PathBuf>,

    /// The starting path, same as the positional argument
    #[arg(long, value_name = "PATH")]
    path: Option<PathBuf>,

    /// Depth of the directory tree (root is 0, negative for unlimited)
    #[arg(long, default_value_t = 999, allow_negative_numbers = true)]
    depth: i64,

    /// File extension to include, without the dot (can be used multiple times)
    #[arg(long = "file-include", value_name = "EXT", value_delimiter = ',')]
    file_include: Vec<String>,

    /// File extension to exclude, without the dot (can be used multiple times)
    #[arg(long = "file-exclude", value_name = "EXT", value_delimiter = ',')]
    file_exclude: Vec<String>,

    /// Minimum size of shown entries, e.g. 10KB, 20MB
    #[arg(long = "min-size", value_name = "SIZE")]
    min_size: Option<String>,

    /// Maximum size of shown entries, e.g. 10KB, 20MB
    #[arg(long = "max-size", value_name = "SIZE")]
    max_size: Option<String>,

    /// Only print directories
    #[arg(long = "only-path")]
    only_path: bool,

    /// Control color output: always, auto, never
    #[arg(long = "color", value_name = "WHEN", default_value = "always")]
    color: ColorMode,

    /// Log progress to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Route `log` output to stderr at a level picked by `--verbose`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

/// Block until the user presses Enter (or stdin is closed).
fn wait_for_enter() {
    let mut stdout = io::stdout();
    if let Err(e) = writeln!(stdout, "Press Enter to quit...").and_then(|_| stdout.flush()) {
        debug!("failed to write prompt: {}", e);
    }
    let mut line = String::new();
    if let Err(e) = io::stdin().read_line(&mut line) {
        debug!("failed to read stdin: {}", e);
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!("parsed arguments: {:?}", args);

    let config = ScanConfig {
        root_path: args
            .root
            .or(args.path)
            .unwrap_or_else(|| PathBuf::from(".")),
        // Negative depth means no limit
        max_depth: usize::try_from(args.depth).ok(),
        include_exts: args.file_include,
        exclude_exts: args.file_exclude,
        min_size: args.min_size,
        max_size: args.max_size,
        only_path: args.only_path,
    };

    let output = ConsoleFormatter::stdout(OutputConfig {
        use_color: should_use_color(args.color),
    });
    let mut renderer = TreeRenderer::new(config, output);

    // Output failures are reported but never change the exit status
    if let Err(e) = renderer.run() {
        error!("error writing output: {}", e);
    }

    wait_for_enter();
}
