//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::engine::RunOptions;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "eidophone")]
#[command(about = "Render a folio's glyphs as a tone stack and a cymatic field", long_about = None)]
pub struct Args {
    /// Folio identifier (e.g. f67r)
    pub folio: String,

    /// Do not write the WAV and PNG artifacts
    #[arg(long)]
    pub no_save: bool,

    /// Do not display the cymatic preview
    #[arg(long)]
    pub no_show: bool,

    /// YAML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Persist/display switches for the engine
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            save: !self.no_save,
            show: !self.no_show,
        }
    }
}
