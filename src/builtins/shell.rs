//! `shell` - run a script file.

use std::path::Path;

use tracing::warn;

use crate::args::ArgumentVector;
use crate::cli::script::run_script;
use crate::command::{Command, CommandDescriptor, InvocationContext, Outcome};
use crate::error::Result;

/// Feeds every line of a script file to the running invoker.
pub struct ShellCommand {
    descriptor: CommandDescriptor,
}

impl ShellCommand {
    pub fn new() -> Self {
        Self {
            descriptor: CommandDescriptor::new("shell", "Runs a shell file.")
                .with_aliases(["sh", "dsh", "duskshell", "desminshell"]),
        }
    }
}

impl Default for ShellCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for ShellCommand {
    fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    fn invoke(&self, args: &ArgumentVector, ctx: &mut InvocationContext<'_>) -> Result<Outcome> {
        if args.len() != 1 {
            return Ok(Outcome::InvalidUsage);
        }

        let run = run_script(Path::new(args.token_at(0)), ctx.invoker, ctx.session, ctx.ui)?;
        if run.failures > 0 {
            warn!("{} of {} script lines failed", run.failures, run.lines_run);
        }
        Ok(Outcome::Success)
    }

    fn usage(&self, invoked_as: &str) -> Option<Vec<String>> {
        Some(vec![format!("{} <path>", invoked_as)])
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::builtins::testing::Harness;
    use crate::command::Dispatch;
    use crate::session::MAX_SCRIPT_DEPTH;

    fn harness_in(dir: &TempDir) -> Harness {
        let mut shell = Harness::new();
        shell.session.set_directory(dir.path());
        shell
    }

    #[test]
    fn runs_lines_in_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("hello.dsh"), "set who world\necho hello %who%\n").unwrap();
        let mut shell = harness_in(&temp);

        let dispatch = shell.run("shell hello.dsh");
        assert_eq!(
            dispatch,
            Dispatch::Completed {
                command: "shell".to_string()
            }
        );
        assert_eq!(shell.ui.messages(), &["hello world"]);
        assert_eq!(shell.session.script_depth(), 0);
    }

    #[test]
    fn failing_line_does_not_stop_script() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("s.dsh"), "bogus\necho after\n").unwrap();
        let mut shell = harness_in(&temp);

        shell.run("sh s.dsh");
        assert!(shell.ui.has_error("Unknown command: bogus"));
        assert!(shell.ui.has_message("after"));
    }

    #[test]
    fn exit_stops_script() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("s.dsh"), "echo one\nexit\necho two\n").unwrap();
        let mut shell = harness_in(&temp);

        shell.run("dsh s.dsh");
        assert_eq!(shell.ui.messages(), &["one"]);
        assert!(shell.session.exit_requested());
    }

    #[test]
    fn uses_session_line_delimiter() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("s.dsh"), "echo a;echo b").unwrap();
        let mut shell = harness_in(&temp);
        shell.session.set_script_eol(";");

        shell.run("shell s.dsh");
        assert_eq!(shell.ui.messages(), &["a", "b"]);
    }

    #[test]
    fn long_aliases_run_scripts() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("s.dsh"), "echo aliased\n").unwrap();
        let mut shell = harness_in(&temp);

        for line in ["duskshell s.dsh", "desminshell s.dsh"] {
            assert_eq!(
                shell.run(line),
                Dispatch::Completed {
                    command: "shell".to_string()
                }
            );
        }
        assert_eq!(shell.ui.messages(), &["aliased", "aliased"]);
    }

    #[test]
    fn wrong_argument_count_is_invalid_usage() {
        let mut shell = Harness::new();
        assert_eq!(shell.run("shell"), Dispatch::Failed);
        assert_eq!(shell.run("shell a.dsh b.dsh"), Dispatch::Failed);
        assert_eq!(shell.ui.usages().len(), 2);
    }

    #[test]
    fn missing_script_is_reported_as_fault() {
        let temp = TempDir::new().unwrap();
        let mut shell = harness_in(&temp);
        assert_eq!(shell.run("shell nothing.dsh"), Dispatch::Failed);
        assert!(shell.ui.has_error("Script not found"));
        assert_eq!(shell.session.script_depth(), 0);
    }

    #[test]
    fn recursive_script_is_bounded() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("loop.dsh"), "shell loop.dsh\n").unwrap();
        let mut shell = harness_in(&temp);

        shell.run("shell loop.dsh");
        assert!(shell.ui.has_error(&format!("limit {}", MAX_SCRIPT_DEPTH)));
        assert_eq!(shell.session.script_depth(), 0);
    }
}
