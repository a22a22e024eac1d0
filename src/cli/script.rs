//! Script files.
//!
//! A script is a text file of shell lines. Lines are split on an exact
//! delimiter, blank lines are skipped, and the rest are fed to the invoker
//! one at a time as if typed at the prompt.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::command::{Dispatch, Invoker};
use crate::error::{Result, ShellError};
use crate::session::Session;
use crate::ui::UserInterface;

/// Read the non-blank lines of a script, in file order.
///
/// # Errors
///
/// Returns `ScriptNotFound` if the file doesn't exist.
pub fn read_script(path: &Path, eol: &str) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ShellError::ScriptNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ShellError::Io(e)
        }
    })?;

    Ok(split_lines(&content, eol))
}

fn split_lines(content: &str, eol: &str) -> Vec<String> {
    let pieces: Vec<&str> = if eol.is_empty() {
        vec![content]
    } else {
        content.split(eol).collect()
    };
    pieces
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Summary of a script run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptRun {
    /// Lines handed to the invoker.
    pub lines_run: usize,
    /// Lines whose dispatch failed.
    pub failures: usize,
    /// Whether a command asked the shell to exit.
    pub exited: bool,
}

/// Run a script through the invoker.
///
/// Relative paths resolve against the session directory. Each line is
/// dispatched in order; a failing line is reported and the script goes
/// on. The run stops early once the exit flag is set. In verbose output a
/// summary line follows the run.
///
/// # Errors
///
/// Returns `ScriptDepthExceeded` if scripts nest too deeply and
/// `ScriptNotFound` if the file doesn't exist.
pub fn run_script(
    path: &Path,
    invoker: &Invoker,
    session: &mut Session,
    ui: &mut dyn UserInterface,
) -> Result<ScriptRun> {
    let path = session.resolve_path(path);
    session.enter_script()?;
    let result = read_script(&path, session.script_eol()).map(|lines| {
        info!("Running script {} ({} lines)", path.display(), lines.len());
        let mut run = ScriptRun::default();
        for line in &lines {
            if session.exit_requested() {
                run.exited = true;
                break;
            }
            debug!("script> {}", line);
            run.lines_run += 1;
            if invoker.invoke(line, session, ui) == Dispatch::Failed {
                run.failures += 1;
            }
        }
        run.exited |= session.exit_requested();
        run
    });
    session.leave_script();

    if let Ok(run) = &result {
        if ui.output_mode().shows_details() {
            report_run(&path, run, ui);
        }
    }
    result
}

fn report_run(path: &Path, run: &ScriptRun, ui: &mut dyn UserInterface) {
    let summary = format!(
        "{}: {} lines run, {} failed",
        path.display(),
        run.lines_run,
        run.failures
    );
    if run.failures == 0 {
        ui.success(&summary);
    } else {
        ui.warning(&summary);
    }
}
