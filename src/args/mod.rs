//! Argument model.
//!
//! - [`tokenize`] splits an input line on whitespace
//! - [`TokenKind`] classifies a token as a switch, variable or value
//! - [`ArgumentVector`] is the read-only token sequence a command receives
//!
//! # Example
//!
//! ```
//! use desmin::args::{tokenize, ArgumentVector};
//!
//! let tokens = tokenize("color -bn blue");
//! let args = ArgumentVector::new(tokens.into_iter().skip(1));
//! assert_eq!(args.tokens(), vec!["-b", "-n", "blue"]);
//! assert!(args.has_short_switch('n'));
//! ```

pub mod token;
pub mod tokenize;
pub mod vector;

pub use token::{Switch, TokenKind, Variable, VariableStyle};
pub use tokenize::{expand_chained_switches, tokenize};
pub use vector::{ArgumentVector, LookupMode};
