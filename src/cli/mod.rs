//! Command-line host for Desmin.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`host`] - Routes a run to one line, a script or the prompt loop
//! - [`prompt`] - The interactive read and dispatch loop
//! - [`script`] - Script file reading and execution

pub mod args;
pub mod host;
pub mod prompt;
pub mod script;

pub use args::Cli;
pub use host::{Host, RunResult};
pub use prompt::{banner, LoopSummary, PromptLoop};
pub use script::{read_script, run_script, ScriptRun};
