//! Desmin - an interactive command shell with a switch-aware argument model.
//!
//! Lines typed at the prompt are split into tokens, the first token is
//! resolved to a registered command by name or alias, and the rest become
//! an [`ArgumentVector`](args::ArgumentVector) the command queries for
//! switches, variables and values.
//!
//! # Modules
//!
//! - [`args`] - Tokenizing and the argument vector
//! - [`builtins`] - The built-in command set
//! - [`cli`] - Command-line host, prompt loop and scripts
//! - [`command`] - Command trait, registry and invoker
//! - [`config`] - Configuration loading and parsing
//! - [`error`] - Error types and result aliases
//! - [`session`] - Per-process shell state
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use desmin::builtins::default_registry;
//! use desmin::command::{Dispatch, Invoker};
//! use desmin::session::Session;
//! use desmin::ui::MockUI;
//!
//! let invoker = Invoker::new(default_registry().unwrap());
//! let mut session = Session::new("admin", "box", "/home/admin");
//! let mut ui = MockUI::new();
//!
//! invoker.invoke("set greeting hello", &mut session, &mut ui);
//! invoker.invoke("echo %greeting% world", &mut session, &mut ui);
//! assert_eq!(ui.messages(), &["hello world"]);
//!
//! assert_eq!(invoker.invoke("nosuchcmd", &mut session, &mut ui), Dispatch::Failed);
//! ```

pub mod args;
pub mod builtins;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod session;
pub mod ui;

pub use error::{Result, ShellError};
