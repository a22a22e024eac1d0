//! `set` - list, assign and remove shell variables.

use crate::args::{ArgumentVector, TokenKind};
use crate::command::{Command, CommandDescriptor, InvocationContext, Outcome};
use crate::error::Result;
use crate::ui::Table;

/// Manages the session's variables.
///
/// - `set` lists every variable
/// - `set <name> <value...>` assigns, joining the value words with spaces
/// - `set -d <name>` removes
pub struct SetCommand {
    descriptor: CommandDescriptor,
}

impl SetCommand {
    pub fn new() -> Self {
        Self {
            descriptor: CommandDescriptor::new("set", "Lists, sets or removes shell variables.")
                .with_aliases(["var"]),
        }
    }
}

impl Default for SetCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for SetCommand {
    fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    fn invoke(&self, args: &ArgumentVector, ctx: &mut InvocationContext<'_>) -> Result<Outcome> {
        if args.is_empty() {
            let mut table = Table::new(["Name", "Value"]);
            for (name, value) in ctx.session.variables() {
                table.add_row([name, value]);
            }
            if table.is_empty() {
                ctx.ui.message("No variables set.");
            } else {
                for line in table.lines() {
                    ctx.ui.message(&line);
                }
            }
            return Ok(Outcome::Success);
        }

        if args.has_switch('d') || args.has_switch("delete") {
            let mut name = args.argument_after_switch("delete");
            if name.is_empty() {
                name = args.argument_after_switch('d');
            }
            if !is_valid_name(name) || args.len() != 2 {
                return Ok(Outcome::InvalidUsage);
            }
            if ctx.session.remove_variable(name).is_none() {
                ctx.ui.warning(&format!("Variable '{}' is not set", name));
            }
            return Ok(Outcome::Success);
        }

        let name = args.token_at(0);
        if !is_valid_name(name) || args.len() < 2 {
            return Ok(Outcome::InvalidUsage);
        }
        let value = args.iter().skip(1).collect::<Vec<_>>().join(" ");
        ctx.session.set_variable(name, value);
        Ok(Outcome::Success)
    }

    fn usage(&self, invoked_as: &str) -> Option<Vec<String>> {
        Some(vec![
            invoked_as.to_string(),
            format!("{} <name> <value>", invoked_as),
            format!("{} <-d|--delete> <name>", invoked_as),
        ])
    }
}

/// A plain positional token without variable delimiters.
fn is_valid_name(name: &str) -> bool {
    TokenKind::classify(name) == TokenKind::Positional
        && !name.is_empty()
        && !name.contains(['%', '$', '{', '}'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::testing::Harness;
    use crate::command::Dispatch;

    #[test]
    fn assigns_multi_word_value() {
        let mut shell = Harness::new();
        shell.run("set greeting hello there");
        assert_eq!(shell.session.variable("greeting"), Some("hello there"));
    }

    #[test]
    fn alias_assigns_too() {
        let mut shell = Harness::new();
        shell.run("var x 1");
        assert_eq!(shell.session.variable("x"), Some("1"));
    }

    #[test]
    fn lists_variables_in_a_table() {
        let mut shell = Harness::new();
        shell.run("set b 2");
        shell.run("set a 1");
        shell.run("set");
        let rows: Vec<&String> = shell
            .ui
            .messages()
            .iter()
            .filter(|l| l.starts_with('│'))
            .collect();
        // header, then name order
        assert_eq!(rows.len(), 3);
        assert!(rows[1].contains("a") && rows[1].contains("1"));
        assert!(rows[2].contains("b") && rows[2].contains("2"));
    }

    #[test]
    fn empty_listing() {
        let mut shell = Harness::new();
        shell.run("set");
        assert!(shell.ui.has_message("No variables set."));
    }

    #[test]
    fn removes_with_short_and_long_switch() {
        let mut shell = Harness::new();
        shell.run("set a 1");
        shell.run("set b 2");
        shell.run("set -d a");
        shell.run("set --delete b");
        assert_eq!(shell.session.variables().count(), 0);
    }

    #[test]
    fn removing_unknown_variable_warns() {
        let mut shell = Harness::new();
        let dispatch = shell.run("set -d ghost");
        assert!(matches!(dispatch, Dispatch::Completed { .. }));
        assert!(shell.ui.has_warning("ghost"));
    }

    #[test]
    fn name_without_value_is_invalid_usage() {
        let mut shell = Harness::new();
        assert_eq!(shell.run("set lonely"), Dispatch::Failed);
        assert!(shell.ui.has_error("Invalid usage of 'set'"));
        assert_eq!(shell.ui.usages().len(), 1);
    }

    #[test]
    fn delete_without_name_is_invalid_usage() {
        let mut shell = Harness::new();
        assert_eq!(shell.run("set -d"), Dispatch::Failed);
    }

    #[test]
    fn variable_shaped_names_are_rejected() {
        let mut shell = Harness::new();
        assert_eq!(shell.run("set %x% 1"), Dispatch::Failed);
        assert_eq!(shell.session.variables().count(), 0);
    }
}
