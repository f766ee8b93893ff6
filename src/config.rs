use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

/// Directory next to the working directory where the tuner writes its log.
pub const DEFAULT_SIBLING_DIR: &str = "blunder";
pub const DEFAULT_FILE_NAME: &str = "errors.txt";

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Plot a tuner error-rate log against step index.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Error-rate file, one float per line.
    /// Defaults to ../blunder/errors.txt relative to the working directory.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_path: PathBuf,
}

impl Config {
    /// Resolve the input path, falling back to the sibling-directory
    /// convention computed from the current working directory.
    pub fn from_args(args: Args) -> Result<Self> {
        let input_path = match args.input {
            Some(path) => path,
            None => {
                let cwd = std::env::current_dir().context("reading current directory")?;
                default_input_path_from(&cwd)
            }
        };
        Ok(Self { input_path })
    }
}

/// `<parent of cwd>/blunder/errors.txt`. A root directory is its own parent.
pub fn default_input_path_from(cwd: &Path) -> PathBuf {
    cwd.parent()
        .unwrap_or(cwd)
        .join(DEFAULT_SIBLING_DIR)
        .join(DEFAULT_FILE_NAME)
}
