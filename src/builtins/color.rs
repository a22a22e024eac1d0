//! `color` - pick console colours.

use console::style;

use crate::args::ArgumentVector;
use crate::command::{Command, CommandDescriptor, InvocationContext, Outcome};
use crate::error::Result;
use crate::session::ShellColor;

/// Lists the palette or selects foreground and background colours.
pub struct ColorCommand {
    descriptor: CommandDescriptor,
}

impl ColorCommand {
    pub fn new() -> Self {
        Self {
            descriptor: CommandDescriptor::new(
                "color",
                "Changes the console foreground and background colors.",
            )
            .with_aliases(["col", "cols", "colors", "colour", "colours"]),
        }
    }
}

impl Default for ColorCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for ColorCommand {
    fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    fn invoke(&self, args: &ArgumentVector, ctx: &mut InvocationContext<'_>) -> Result<Outcome> {
        if args.is_empty() || args.starts_with_switch('l') || args.starts_with_switch("list") {
            for color in ShellColor::ALL {
                let swatch = style("  ").bg(color.console_color());
                ctx.ui.message(&format!("|{}| {}", swatch, color));
            }
            return Ok(Outcome::Success);
        }

        let wants_fg = args.has_switch('f') || args.has_switch("foreground");
        let wants_bg = args.has_switch('b') || args.has_switch("background");
        if !wants_fg && !wants_bg {
            return Ok(Outcome::InvalidUsage);
        }

        let foreground = if wants_fg {
            match selected(args, "foreground", 'f') {
                Some(color) => Some(color),
                None => return Ok(Outcome::InvalidUsage),
            }
        } else {
            None
        };
        let background = if wants_bg {
            match selected(args, "background", 'b') {
                Some(color) => Some(color),
                None => return Ok(Outcome::InvalidUsage),
            }
        } else {
            None
        };

        if let Some(color) = foreground {
            ctx.session.set_foreground(color);
        }
        if let Some(color) = background {
            ctx.session.set_background(color);
            if !args.has_switch('n') && !args.has_switch("no-clear") {
                ctx.ui.clear_screen();
            }
        }
        Ok(Outcome::Success)
    }

    fn usage(&self, invoked_as: &str) -> Option<Vec<String>> {
        Some(vec![
            format!("{} [-l|--list]", invoked_as),
            format!("{} <-f|--foreground> <color>", invoked_as),
            format!("{} <-b|--background> <color> [-n]", invoked_as),
            "<color> is a name or identifier from the list; -n keeps the screen".to_string(),
        ])
    }
}

/// Colour named after the long switch, else after the short one.
///
/// Only consulted when one of the two switches is present.
fn selected(args: &ArgumentVector, long: &str, short: char) -> Option<ShellColor> {
    let value = if args.has_switch(long) {
        args.argument_after_switch(long)
    } else {
        args.argument_after_switch(short)
    };
    if value.starts_with('-') {
        return None;
    }
    ShellColor::parse(value)
}
