//! `argv` - show how a line was split and classified.

use crate::args::{ArgumentVector, TokenKind};
use crate::command::{Command, CommandDescriptor, InvocationContext, Outcome};
use crate::error::Result;

/// Hidden debugging aid.
pub struct ArgvCommand {
    descriptor: CommandDescriptor,
}

impl ArgvCommand {
    pub fn new() -> Self {
        Self {
            descriptor: CommandDescriptor::new("argv", "Shows how arguments are classified.")
                .with_aliases(["args"])
                .hidden(),
        }
    }
}

impl Default for ArgvCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for ArgvCommand {
    fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    fn invoke(&self, args: &ArgumentVector, ctx: &mut InvocationContext<'_>) -> Result<Outcome> {
        if args.is_empty() {
            ctx.ui.message("(no arguments)");
            return Ok(Outcome::Success);
        }
        for (i, token) in args.iter().enumerate() {
            let kind = TokenKind::classify(token);
            ctx.ui.message(&format!("{}: {} [{}]", i, token, kind.label()));
        }
        Ok(Outcome::Success)
    }
}
