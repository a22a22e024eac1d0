//! Command registry for name and alias resolution.
//!
//! The [`CommandRegistry`] stores commands in registration order and keeps
//! one shared key space for canonical names and aliases.

use std::collections::HashMap;

use tracing::debug;

use super::descriptor::CommandDescriptor;
use super::Command;
use crate::error::{Result, ShellError};

/// Registry of all commands the shell can invoke.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    keys: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under its name and aliases.
    ///
    /// Every key is checked before anything is inserted, so a rejected
    /// command leaves the registry unchanged.
    pub fn register(&mut self, command: Box<dyn Command>) -> Result<()> {
        let descriptor = command.descriptor();
        let mut seen: Vec<&str> = Vec::new();

        for key in descriptor.keys() {
            if key.is_empty() || key.chars().any(char::is_whitespace) {
                return Err(ShellError::InvalidCommandKey {
                    key: key.to_string(),
                });
            }
            if self.keys.contains_key(key) || seen.contains(&key) {
                return Err(ShellError::DuplicateCommand {
                    key: key.to_string(),
                });
            }
            seen.push(key);
        }

        let index = self.commands.len();
        for key in descriptor.keys() {
            self.keys.insert(key.to_string(), index);
        }
        debug!(
            "Registered command '{}' ({} aliases)",
            descriptor.name(),
            descriptor.aliases().len()
        );
        self.commands.push(command);
        Ok(())
    }

    /// Register several commands, stopping at the first error.
    pub fn register_all(&mut self, commands: Vec<Box<dyn Command>>) -> Result<()> {
        for command in commands {
            self.register(command)?;
        }
        Ok(())
    }

    /// Look up a command by canonical name or alias.
    pub fn resolve(&self, key: &str) -> Result<&dyn Command> {
        self.get(key).ok_or_else(|| ShellError::CommandNotFound {
            name: key.to_string(),
        })
    }

    /// Look up a command, returning `None` when absent.
    pub fn get(&self, key: &str) -> Option<&dyn Command> {
        self.keys
            .get(key)
            .and_then(|&index| self.commands.get(index))
            .map(|c| c.as_ref())
    }

    /// Whether `key` resolves to a command.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    /// Descriptors in registration order.
    pub fn list(&self, include_hidden: bool) -> Vec<&CommandDescriptor> {
        self.commands
            .iter()
            .map(|c| c.descriptor())
            .filter(|d| include_hidden || !d.is_hidden())
            .collect()
    }

    /// Every name and alias, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::ArgumentVector;
    use crate::command::{InvocationContext, Outcome};

    struct MockCommand {
        descriptor: CommandDescriptor,
    }

    impl MockCommand {
        fn boxed(descriptor: CommandDescriptor) -> Box<dyn Command> {
            Box::new(Self { descriptor })
        }
    }

    impl Command for MockCommand {
        fn descriptor(&self) -> &CommandDescriptor {
            &self.descriptor
        }

        fn invoke(
            &self,
            _args: &ArgumentVector,
            _ctx: &mut InvocationContext<'_>,
        ) -> Result<Outcome> {
            Ok(Outcome::Success)
        }
    }

    fn same(a: &dyn Command, b: &dyn Command) -> bool {
        std::ptr::addr_eq(a as *const dyn Command, b as *const dyn Command)
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = CommandRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn resolve_by_name_and_alias_is_symmetric() {
        let mut registry = CommandRegistry::new();
        registry
            .register(MockCommand::boxed(
                CommandDescriptor::new("version", "").with_aliases(["v", "ver"]),
            ))
            .unwrap();

        let by_name = registry.resolve("version").unwrap();
        let by_alias = registry.resolve("v").unwrap();
        assert!(same(by_name, by_alias));
        assert_eq!(by_alias.descriptor().name(), "version");
    }

    #[test]
    fn keys_cover_names_and_aliases() {
        let mut registry = CommandRegistry::new();
        registry
            .register(MockCommand::boxed(
                CommandDescriptor::new("exit", "").with_aliases(["quit", "end"]),
            ))
            .unwrap();
        assert_eq!(registry.keys(), vec!["end", "exit", "quit"]);
    }

    #[test]
    fn resolve_unknown_fails() {
        let registry = CommandRegistry::new();
        let err = registry.resolve("nosuchcmd").err().unwrap();
        assert!(matches!(err, ShellError::CommandNotFound { name } if name == "nosuchcmd"));
    }

    #[test]
    fn resolve_is_case_sensitive() {
        let mut registry = CommandRegistry::new();
        registry
            .register(MockCommand::boxed(CommandDescriptor::new("help", "")))
            .unwrap();
        assert!(registry.resolve("HELP").is_err());
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut registry = CommandRegistry::new();
        registry
            .register(MockCommand::boxed(CommandDescriptor::new("exit", "")))
            .unwrap();
        let err = registry
            .register(MockCommand::boxed(CommandDescriptor::new("exit", "")))
            .unwrap_err();
        assert!(matches!(err, ShellError::DuplicateCommand { key } if key == "exit"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn alias_collision_leaves_registry_unchanged() {
        let mut registry = CommandRegistry::new();
        registry
            .register(MockCommand::boxed(
                CommandDescriptor::new("exit", "").with_aliases(["quit"]),
            ))
            .unwrap();

        let err = registry
            .register(MockCommand::boxed(
                CommandDescriptor::new("leave", "").with_aliases(["bye", "quit"]),
            ))
            .unwrap_err();

        assert!(matches!(err, ShellError::DuplicateCommand { key } if key == "quit"));
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains("leave"));
        assert!(!registry.contains("bye"));
        assert_eq!(registry.resolve("quit").unwrap().descriptor().name(), "exit");
    }

    #[test]
    fn alias_equal_to_own_name_is_rejected() {
        let mut registry = CommandRegistry::new();
        let err = registry
            .register(MockCommand::boxed(
                CommandDescriptor::new("echo", "").with_aliases(["echo"]),
            ))
            .unwrap_err();
        assert!(matches!(err, ShellError::DuplicateCommand { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn empty_or_spaced_keys_are_rejected() {
        let mut registry = CommandRegistry::new();
        let err = registry
            .register(MockCommand::boxed(CommandDescriptor::new("", "")))
            .unwrap_err();
        assert!(matches!(err, ShellError::InvalidCommandKey { .. }));

        let err = registry
            .register(MockCommand::boxed(
                CommandDescriptor::new("ok", "").with_aliases(["two words"]),
            ))
            .unwrap_err();
        assert!(matches!(err, ShellError::InvalidCommandKey { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn list_keeps_order_and_filters_hidden() {
        let mut registry = CommandRegistry::new();
        registry
            .register_all(vec![
                MockCommand::boxed(CommandDescriptor::new("b", "")),
                MockCommand::boxed(CommandDescriptor::new("secret", "").hidden()),
                MockCommand::boxed(CommandDescriptor::new("a", "")),
            ])
            .unwrap();

        let visible: Vec<_> = registry.list(false).iter().map(|d| d.name()).collect();
        assert_eq!(visible, vec!["b", "a"]);

        let all: Vec<_> = registry.list(true).iter().map(|d| d.name()).collect();
        assert_eq!(all, vec!["b", "secret", "a"]);
    }

    #[test]
    fn hidden_commands_still_resolve() {
        let mut registry = CommandRegistry::new();
        registry
            .register(MockCommand::boxed(
                CommandDescriptor::new("secret", "").hidden(),
            ))
            .unwrap();
        assert!(registry.resolve("secret").is_ok());
    }
}
