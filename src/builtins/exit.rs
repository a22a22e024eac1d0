//! `exit` - stop the shell.

use crate::args::ArgumentVector;
use crate::command::{Command, CommandDescriptor, InvocationContext, Outcome};
use crate::error::Result;

/// Sets the session's exit flag. The dispatch loop stops after this line.
pub struct ExitCommand {
    descriptor: CommandDescriptor,
}

impl ExitCommand {
    pub fn new() -> Self {
        Self {
            descriptor: CommandDescriptor::new("exit", "Exits desmin.")
                .with_aliases(["stop", "quit", "end"]),
        }
    }
}

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for ExitCommand {
    fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    fn invoke(&self, _args: &ArgumentVector, ctx: &mut InvocationContext<'_>) -> Result<Outcome> {
        ctx.session.request_exit();
        Ok(Outcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use crate::builtins::testing::Harness;
    use crate::command::Dispatch;

    #[test]
    fn every_alias_requests_exit() {
        for line in ["exit", "stop", "quit", "end"] {
            let mut shell = Harness::new();
            let dispatch = shell.run(line);
            assert_eq!(
                dispatch,
                Dispatch::Completed {
                    command: "exit".to_string()
                }
            );
            assert!(shell.session.exit_requested());
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut shell = Harness::new();
        assert_eq!(shell.run("EXIT"), Dispatch::Failed);
        assert!(!shell.session.exit_requested());
    }
}
