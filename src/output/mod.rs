//! Tree formatting and display
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `console` - Streaming console formatter with ANSI colors

mod config;
mod console;

// Re-export public types
pub use config::OutputConfig;
pub use console::{ConsoleFormatter, Palette};
