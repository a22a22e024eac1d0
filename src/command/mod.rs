//! Command contract and dispatch.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait implemented by every shell command
//! - [`CommandDescriptor`] for static identity and help metadata
//! - [`CommandRegistry`] for name and alias resolution
//! - [`Invoker`] for the per-line resolve and invoke protocol
//! - [`SyntaxErrorReport`] for usage output after a rejected invocation

pub mod descriptor;
pub mod invoker;
pub mod registry;
pub mod syntax;

pub use descriptor::CommandDescriptor;
pub use invoker::{install_panic_hook, Dispatch, Invoker};
pub use registry::CommandRegistry;
pub use syntax::{SyntaxErrorReport, LEGEND};

use crate::args::ArgumentVector;
use crate::error::Result;
use crate::session::Session;
use crate::ui::UserInterface;

/// Outcome of a command invocation that did not fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran.
    Success,
    /// The command rejected its arguments.
    InvalidUsage,
}

impl From<bool> for Outcome {
    fn from(success: bool) -> Self {
        if success {
            Self::Success
        } else {
            Self::InvalidUsage
        }
    }
}

/// Everything a command can reach while it runs.
pub struct InvocationContext<'a> {
    /// The invoker running this command, for commands that dispatch lines
    /// of their own.
    pub invoker: &'a Invoker,
    /// Host session state.
    pub session: &'a mut Session,
    /// Output sink.
    pub ui: &'a mut dyn UserInterface,
    /// The command name exactly as typed.
    pub invoked_as: &'a str,
}

/// Trait for shell commands.
///
/// A command owns its [`CommandDescriptor`]. Returning `Err` from
/// [`invoke`](Command::invoke) is reserved for genuine faults; rejected
/// arguments are reported with [`Outcome::InvalidUsage`].
pub trait Command: Send + Sync {
    /// Static identity of the command.
    fn descriptor(&self) -> &CommandDescriptor;

    /// Run the command.
    fn invoke(&self, args: &ArgumentVector, ctx: &mut InvocationContext<'_>) -> Result<Outcome>;

    /// Usage lines for `help` and syntax errors.
    fn usage(&self, invoked_as: &str) -> Option<Vec<String>> {
        let _ = invoked_as;
        None
    }

    /// Report shown after [`Outcome::InvalidUsage`].
    ///
    /// Commands without usage lines produce no report, and the invoker falls
    /// back to a generic message.
    fn syntax_error(&self, invoked_as: &str) -> Option<SyntaxErrorReport> {
        self.usage(invoked_as)
            .map(|usage| SyntaxErrorReport::new(invoked_as, usage))
    }
}
