//! Built-in shell commands.
//!
//! | name    | aliases                                |
//! |---------|----------------------------------------|
//! | `help`  | `?`                                    |
//! | `exit`  | `stop`, `quit`, `end`                  |
//! | `echo`  |                                        |
//! | `set`   | `var`                                  |
//! | `color` | `col`, `cols`, `colors`, `colour`, `colours` |
//! | `shell` | `sh`, `dsh`                            |
//! | `argv`  | `args` (hidden)                        |

pub mod argv;
pub mod color;
pub mod echo;
pub mod exit;
pub mod help;
pub mod set;
pub mod shell;

pub use argv::ArgvCommand;
pub use color::ColorCommand;
pub use echo::EchoCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use set::SetCommand;
pub use shell::ShellCommand;

use crate::command::{Command, CommandRegistry};
use crate::error::Result;

/// Every built-in command, in the order `help` lists them.
pub fn builtin_commands() -> Vec<Box<dyn Command>> {
    vec![
        Box::new(HelpCommand::new()),
        Box::new(ExitCommand::new()),
        Box::new(EchoCommand::new()),
        Box::new(SetCommand::new()),
        Box::new(ColorCommand::new()),
        Box::new(ShellCommand::new()),
        Box::new(ArgvCommand::new()),
    ]
}

/// A registry holding the built-in commands.
pub fn default_registry() -> Result<CommandRegistry> {
    let mut registry = CommandRegistry::new();
    registry.register_all(builtin_commands())?;
    Ok(registry)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_registers_everything() {
        let registry = default_registry().unwrap();
        assert_eq!(registry.len(), builtin_commands().len());
        for key in [
            "help", "?", "exit", "quit", "echo", "set", "var", "color", "colours", "sh",
            "desminshell", "argv",
        ] {
            assert!(registry.contains(key), "missing {}", key);
        }
    }

    #[test]
    fn only_argv_is_hidden() {
        let registry = default_registry().unwrap();
        let visible: Vec<&str> = registry.list(false).iter().map(|d| d.name()).collect();
        assert_eq!(visible, vec!["help", "exit", "echo", "set", "color", "shell"]);
        assert_eq!(registry.list(true).len(), 7);
    }
}
