//! `help` - list commands or describe one.

use crate::args::ArgumentVector;
use crate::command::{Command, CommandDescriptor, InvocationContext, Outcome};
use crate::error::Result;
use crate::ui::Table;

/// Lists registered commands, or shows one command's aliases and usage.
pub struct HelpCommand {
    descriptor: CommandDescriptor,
}

impl HelpCommand {
    pub fn new() -> Self {
        Self {
            descriptor: CommandDescriptor::new("help", "Lists commands or shows how to use one.")
                .with_aliases(["?"]),
        }
    }
}

impl Default for HelpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for HelpCommand {
    fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    fn invoke(&self, args: &ArgumentVector, ctx: &mut InvocationContext<'_>) -> Result<Outcome> {
        let include_hidden = args.has_switch('a') || args.has_switch("all");
        let names = args.positionals();

        match names.as_slice() {
            [] => {
                let mut table = Table::new(["Command", "Aliases", "Description"]);
                for descriptor in ctx.invoker.registry().list(include_hidden) {
                    table.add_row([
                        descriptor.name().to_string(),
                        descriptor.aliases().join(", "),
                        descriptor.summary().to_string(),
                    ]);
                }
                for line in table.lines() {
                    ctx.ui.message(&line);
                }
                ctx.ui
                    .message(&format!("Type '{} <command>' for details.", ctx.invoked_as));
                Ok(Outcome::Success)
            }
            [name] => {
                let Some(command) = ctx.invoker.registry().get(name) else {
                    return Ok(Outcome::InvalidUsage);
                };
                describe(command, name, ctx);
                Ok(Outcome::Success)
            }
            _ => Ok(Outcome::InvalidUsage),
        }
    }

    fn usage(&self, invoked_as: &str) -> Option<Vec<String>> {
        Some(vec![
            format!("{} [-a|--all]", invoked_as),
            format!("{} <command>", invoked_as),
        ])
    }
}

fn describe(command: &dyn Command, typed: &str, ctx: &mut InvocationContext<'_>) {
    let descriptor = command.descriptor();
    ctx.ui.show_header(descriptor.name());
    if !descriptor.summary().is_empty() {
        ctx.ui.message(descriptor.summary());
    }
    if !descriptor.aliases().is_empty() {
        ctx.ui
            .message(&format!("Aliases: {}", descriptor.aliases().join(", ")));
    }
    match command.usage(typed) {
        Some(lines) => {
            ctx.ui.message("Usage:");
            for line in lines {
                ctx.ui.message(&format!("  {}", line));
            }
        }
        None => ctx.ui.message(&format!("Usage: {}", typed)),
    }
}
