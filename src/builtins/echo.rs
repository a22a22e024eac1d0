//! `echo` - print text with variable substitution.

use crate::args::{ArgumentVector, Variable};
use crate::command::{Command, CommandDescriptor, InvocationContext, Outcome};
use crate::error::Result;
use crate::session::Session;

/// Prints its arguments joined by single spaces.
///
/// A token that is exactly `%name%` or `${name}` is replaced by the session
/// variable of that name, else by the environment variable, else left as
/// typed.
pub struct EchoCommand {
    descriptor: CommandDescriptor,
}

impl EchoCommand {
    pub fn new() -> Self {
        Self {
            descriptor: CommandDescriptor::new("echo", "Prints text to the console."),
        }
    }
}

impl Default for EchoCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for EchoCommand {
    fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    fn invoke(&self, args: &ArgumentVector, ctx: &mut InvocationContext<'_>) -> Result<Outcome> {
        let words: Vec<String> = args
            .iter()
            .map(|token| substitute(token, ctx.session))
            .collect();
        ctx.ui.message(&words.join(" "));
        Ok(Outcome::Success)
    }

    fn usage(&self, invoked_as: &str) -> Option<Vec<String>> {
        Some(vec![format!("{} [text|%name%|${{name}}]...", invoked_as)])
    }
}

/// Value of a whole-token variable, or the token unchanged.
pub fn substitute(token: &str, session: &Session) -> String {
    let Some(variable) = Variable::parse(token) else {
        return token.to_string();
    };
    session
        .variable(variable.name())
        .map(str::to_string)
        .or_else(|| std::env::var(variable.name()).ok())
        .unwrap_or_else(|| token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::testing::Harness;

    #[test]
    fn joins_arguments() {
        let mut shell = Harness::new();
        shell.run("echo hello   world");
        assert_eq!(shell.ui.messages(), &["hello world"]);
    }

    #[test]
    fn no_arguments_prints_empty_line() {
        let mut shell = Harness::new();
        shell.run("echo");
        assert_eq!(shell.ui.messages(), &[""]);
    }

    #[test]
    fn substitutes_both_variable_styles() {
        let mut shell = Harness::new();
        shell.session.set_variable("who", "world");
        shell.run("echo hello %who% ${who}");
        assert_eq!(shell.ui.messages(), &["hello world world"]);
    }

    #[test]
    fn unknown_variables_stay_verbatim() {
        let mut shell = Harness::new();
        shell.run("echo %desmin_surely_unset_var% ${desmin_surely_unset_var}");
        assert_eq!(
            shell.ui.messages(),
            &["%desmin_surely_unset_var% ${desmin_surely_unset_var}"]
        );
    }

    #[test]
    fn session_variables_shadow_environment() {
        let session = {
            let mut s = Session::new("a", "b", "/");
            s.set_variable("PATH", "shadowed");
            s
        };
        assert_eq!(substitute("%PATH%", &session), "shadowed");
    }

    #[test]
    fn only_whole_tokens_are_variables() {
        let mut session = Session::new("a", "b", "/");
        session.set_variable("x", "1");
        assert_eq!(substitute("pre%x%", &session), "pre%x%");
        assert_eq!(substitute("%x%", &session), "1");
    }
}
