//! Command-line interface definitions
//!
//! Lives in the library so `xtask` can render the man page from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::code::ErrorCorrection;
use crate::config::Config;

/// Version string shown by `--version`.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("QRCAST_BUILD_DATE"),
    ")"
);

/// Version string shown by `--version`.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("QRCAST_BUILD_DATE"),
    ")"
);

/// Air-gapped one-way data transfer through a looping sequence of QR codes.
#[derive(Debug, Parser)]
#[command(name = "qrcast", author, version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Log filter, e.g. `debug` or `qrcast=trace` (overrides $QRCAST_LOG)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Write logs to a file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a payload as a looping sequence of QR codes
    ///
    /// Space cycles the speed, arrow keys and the mouse scrub through
    /// chunks, `?` shows all keys, `q` quits.
    Send(SendArgs),

    /// Print the frame strings for a payload without opening the UI
    Frames(FramesArgs),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Payload and framing options shared by `send` and `frames`.
#[derive(Debug, Clone, Default, Args)]
pub struct TransferArgs {
    /// Payload file; omit or use `-` to read stdin
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Maximum characters per chunk
    #[arg(short = 'c', long, value_name = "N")]
    pub max_chunk_size: Option<usize>,

    /// QR error correction level
    #[arg(short = 'e', long, value_enum, value_name = "LEVEL")]
    pub ecl: Option<ErrorCorrection>,
}

impl TransferArgs {
    /// Override config values with the flags that were given.
    pub fn apply(&self, config: &mut Config) {
        if let Some(size) = self.max_chunk_size {
            config.transfer.max_chunk_size = size;
        }
        if let Some(level) = self.ecl {
            config.transfer.error_correction = level;
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct SendArgs {
    #[command(flatten)]
    pub transfer: TransferArgs,

    /// Starting position in the configured speed list
    #[arg(short = 's', long, value_name = "I")]
    pub speed_index: Option<usize>,

    /// Terminal columns per QR module
    #[arg(long, value_name = "N")]
    pub scale: Option<u8>,

    /// Progress label template: {index}, {index0}, {total}, {checksum}
    #[arg(long, value_name = "TEMPLATE")]
    pub label: Option<String>,
}

impl SendArgs {
    /// Override config values with the flags that were given.
    pub fn apply(&self, config: &mut Config) {
        self.transfer.apply(config);
        if let Some(index) = self.speed_index {
            config.playback.initial_speed_index = index;
        }
        if let Some(scale) = self.scale {
            config.display.scale = scale;
        }
        if let Some(label) = &self.label {
            config.display.progress_label = label.clone();
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct FramesArgs {
    #[command(flatten)]
    pub transfer: TransferArgs,

    /// Print a JSON document instead of one frame per line
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Open the config file in $EDITOR
    Edit,
    /// Print the config file location
    Path,
    /// Add missing fields to the config file
    Migrate {
        /// Apply changes without prompting
        #[arg(short, long)]
        yes: bool,
    },
}
