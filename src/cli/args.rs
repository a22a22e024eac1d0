//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::ui::OutputMode;

/// Desmin - an interactive command shell.
#[derive(Debug, Parser)]
#[command(name = "desmin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides .desmin/config.yml discovery)
    #[arg(long, env = "DESMIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Run a script file, then exit
    #[arg(long, value_name = "FILE", conflicts_with = "command")]
    pub script: Option<PathBuf>,

    /// Run a single command line, then exit
    #[arg(short = 'c', long, value_name = "LINE")]
    pub command: Option<String>,

    /// Show verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Output mode requested on the command line, if any.
    pub fn output_mode(&self) -> Option<OutputMode> {
        if self.quiet {
            Some(OutputMode::Quiet)
        } else if self.verbose {
            Some(OutputMode::Verbose)
        } else {
            None
        }
    }

    /// Whether the prompt loop will read from stdin.
    pub fn is_interactive(&self) -> bool {
        self.script.is_none() && self.command.is_none()
    }
}
