//! The interactive dispatch loop.
//!
//! Shows the banner, reads one line, hands it to the invoker and repeats
//! until end of input or until a command sets the exit flag. A failing line
//! never ends the loop.

use std::io::BufRead;

use console::style;
use tracing::debug;

use crate::command::{Dispatch, Invoker};
use crate::error::Result;
use crate::session::Session;
use crate::ui::UserInterface;

/// Totals for one run of the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    /// Non-blank lines dispatched.
    pub lines: usize,
    /// Lines whose dispatch failed.
    pub failures: usize,
}

/// Read-dispatch loop over any line source.
pub struct PromptLoop<'a, R> {
    invoker: &'a Invoker,
    reader: R,
    echo_prompt: bool,
}

impl<'a, R: BufRead> PromptLoop<'a, R> {
    /// Create a loop reading from `reader`.
    pub fn new(invoker: &'a Invoker, reader: R) -> Self {
        Self {
            invoker,
            reader,
            echo_prompt: true,
        }
    }

    /// Whether to show the banner before each read.
    pub fn with_echo_prompt(mut self, echo_prompt: bool) -> Self {
        self.echo_prompt = echo_prompt;
        self
    }

    /// Run until end of input or the exit flag.
    ///
    /// # Errors
    ///
    /// Only failures to read input are returned. Bytes that are not valid
    /// UTF-8 are replaced, so a malformed line is dispatched like any other.
    pub fn run(
        &mut self,
        session: &mut Session,
        ui: &mut dyn UserInterface,
    ) -> Result<LoopSummary> {
        let mut summary = LoopSummary::default();
        let mut buf = Vec::new();

        while !session.exit_requested() {
            if self.echo_prompt {
                ui.show_prompt(&banner(session));
            }

            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                debug!("End of input");
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            match self.invoker.invoke(line.trim_end_matches(['\r', '\n']), session, ui) {
                Dispatch::Empty => {}
                Dispatch::Completed { .. } => summary.lines += 1,
                Dispatch::Failed => {
                    summary.lines += 1;
                    summary.failures += 1;
                }
            }
        }

        Ok(summary)
    }
}

/// The session banner in the selected colours.
pub fn banner(session: &Session) -> String {
    let mut styled = style(session.banner());
    if let Some(color) = session.foreground() {
        styled = styled.fg(color.console_color());
    }
    if let Some(color) = session.background() {
        styled = styled.bg(color.console_color());
    }
    styled.to_string()
}
