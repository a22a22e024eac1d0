//! Host application.
//!
//! Owns the one [`Session`] and [`Invoker`] of the process and routes the
//! command line to a single line, a script or the interactive loop.

use std::io::BufRead;

use tracing::debug;

use crate::builtins::default_registry;
use crate::cli::args::Cli;
use crate::cli::prompt::PromptLoop;
use crate::cli::script::run_script;
use crate::command::{Dispatch, Invoker};
use crate::config::ShellConfig;
use crate::error::Result;
use crate::session::Session;
use crate::ui::UserInterface;

/// Result of a host run.
#[derive(Debug)]
pub struct RunResult {
    /// Whether the run succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl RunResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// The running shell: configuration, session and invoker.
pub struct Host {
    config: ShellConfig,
    session: Session,
    invoker: Invoker,
}

impl Host {
    /// Build the host with the built-in commands.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateCommand` or `InvalidCommandKey` if registration
    /// fails.
    pub fn new(config: ShellConfig, mut session: Session) -> Result<Self> {
        config.apply(&mut session);
        let invoker = Invoker::new(default_registry()?).with_lookup(config.lookup_mode());
        debug!(
            "Host ready: {} commands, lookup {:?}",
            invoker.registry().len(),
            invoker.lookup_mode()
        );
        Ok(Self {
            config,
            session,
            invoker,
        })
    }

    /// Build the host around an existing invoker.
    pub fn with_invoker(config: ShellConfig, mut session: Session, invoker: Invoker) -> Self {
        config.apply(&mut session);
        Self {
            config,
            session,
            invoker,
        }
    }

    /// The session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The invoker.
    pub fn invoker(&self) -> &Invoker {
        &self.invoker
    }

    /// Route the parsed command line.
    ///
    /// `--command` runs one line and fails when that line fails. `--script`
    /// runs a file and fails only when the file cannot be run. Otherwise
    /// lines are read from `input` until end of input or `exit`.
    pub fn run<R: BufRead>(
        &mut self,
        cli: &Cli,
        input: R,
        ui: &mut dyn UserInterface,
    ) -> Result<RunResult> {
        if let Some(line) = &cli.command {
            return Ok(self.run_line(line, ui));
        }

        if let Some(path) = &cli.script {
            run_script(path, &self.invoker, &mut self.session, ui)?;
            return Ok(RunResult::success());
        }

        let summary = PromptLoop::new(&self.invoker, input)
            .with_echo_prompt(self.config.settings.echo_prompt)
            .run(&mut self.session, ui)?;
        debug!(
            "Prompt loop finished: {} lines, {} failed",
            summary.lines, summary.failures
        );
        Ok(RunResult::success())
    }

    /// Run one line.
    pub fn run_line(&mut self, line: &str, ui: &mut dyn UserInterface) -> RunResult {
        match self.invoker.invoke(line, &mut self.session, ui) {
            Dispatch::Failed => RunResult::failure(1),
            Dispatch::Empty | Dispatch::Completed { .. } => RunResult::success(),
        }
    }
}
