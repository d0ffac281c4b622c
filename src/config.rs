//! Configuration for the `pixel-probe` command-line tool.
//!
//! Options come from command-line arguments via clap, with environment
//! variable fallbacks using the `PIXEL_PROBE_` prefix:
//!
//! - `PIXEL_PROBE_OUTPUT` - Output format, `text` or `json` (default: text)
//! - `PIXEL_PROBE_MAX_BYTES` - Header read budget per file (default: 1 MiB)
//! - `PIXEL_PROBE_JOBS` - Files probed concurrently (default: 4)

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

// =============================================================================
// Default Values
// =============================================================================

/// Default per-file read budget (1 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;

/// Default number of concurrent probes.
pub const DEFAULT_JOBS: usize = 4;

/// Upper bound on concurrent probes.
pub const MAX_JOBS: usize = 256;

// =============================================================================
// CLI Arguments
// =============================================================================

/// Output format for probe results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// One line per file
    #[default]
    Text,
    /// JSON array of reports
    Json,
}

/// pixel-probe - read image dimensions from file headers.
///
/// Detects GIF, JPEG, PNG, BMP and TIFF from their leading bytes and reports
/// width, height and MIME type without decoding pixel data.
#[derive(Parser, Debug, Clone)]
#[command(name = "pixel-probe")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Image files to probe.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, env = "PIXEL_PROBE_OUTPUT")]
    pub output: OutputFormat,

    /// Maximum number of bytes read from each file.
    ///
    /// Headers that need more than this fail as truncated.
    #[arg(long, default_value_t = DEFAULT_MAX_BYTES, env = "PIXEL_PROBE_MAX_BYTES")]
    pub max_bytes: u64,

    /// Number of files probed concurrently.
    #[arg(short, long, default_value_t = DEFAULT_JOBS, env = "PIXEL_PROBE_JOBS")]
    pub jobs: usize,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.paths.is_empty() {
            return Err("At least one file path is required".to_string());
        }

        if self.jobs == 0 || self.jobs > MAX_JOBS {
            return Err(format!("jobs must be between 1 and {}", MAX_JOBS));
        }

        if self.max_bytes == 0 {
            return Err("max_bytes must be greater than 0".to_string());
        }

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
