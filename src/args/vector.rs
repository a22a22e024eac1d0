//! The argument vector handed to every command.

use super::token::{Switch, TokenKind, Variable};
use super::tokenize::expand_chained_switches;

/// How [`ArgumentVector::argument_after_switch`] behaves when the switch is
/// absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupMode {
    /// A missing switch is treated as if it sat at position 0, so the token
    /// at position 1 is returned.
    #[default]
    Lenient,
    /// A missing switch yields the empty sentinel.
    Strict,
}

/// Ordered, read-only sequence of argument tokens.
///
/// Chained short switches are expanded once at construction, so every query
/// sees only simple switches. Lookups never panic: positions outside the
/// vector read as the empty string, which callers treat as "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentVector {
    tokens: Vec<String>,
    lookup: LookupMode,
}

impl ArgumentVector {
    /// Build a vector from raw tokens, expanding chained switches.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_lookup(tokens, LookupMode::default())
    }

    /// Build a vector with an explicit not-found policy.
    pub fn with_lookup<I, S>(tokens: I, lookup: LookupMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = tokens.into_iter().map(Into::into).collect();
        Self {
            tokens: expand_chained_switches(tokens),
            lookup,
        }
    }

    /// An empty vector.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The not-found policy in effect.
    pub fn lookup_mode(&self) -> LookupMode {
        self.lookup
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `position`, or `""` when there is none.
    pub fn token_at(&self, position: usize) -> &str {
        self.get(position).unwrap_or("")
    }

    /// Token at `position`.
    pub fn get(&self, position: usize) -> Option<&str> {
        self.tokens.get(position).map(String::as_str)
    }

    /// A copy of all tokens in order.
    pub fn tokens(&self) -> Vec<String> {
        self.tokens.clone()
    }

    /// Iterate over the tokens.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(String::as_str)
    }

    /// Tokens whose first character is `-`.
    pub fn switches(&self) -> Vec<&str> {
        self.iter().filter(|t| t.starts_with('-')).collect()
    }

    /// Tokens that are not switches, in order.
    pub fn positionals(&self) -> Vec<&str> {
        self.iter()
            .filter(|t| !TokenKind::classify(t).is_switch())
            .collect()
    }

    /// Whether `token` occurs anywhere.
    pub fn has_token(&self, token: &str) -> bool {
        !self.is_empty() && self.tokens.iter().any(|t| t == token)
    }

    /// Whether the switch occurs anywhere.
    pub fn has_switch(&self, switch: impl Into<Switch>) -> bool {
        self.has_token(&switch.into().to_string())
    }

    /// Whether `--name` occurs anywhere.
    pub fn has_long_switch(&self, name: &str) -> bool {
        self.has_switch(name)
    }

    /// Whether `-c` occurs anywhere.
    pub fn has_short_switch(&self, c: char) -> bool {
        self.has_switch(c)
    }

    /// Whether the rendered variable occurs anywhere.
    pub fn has_variable(&self, variable: &Variable) -> bool {
        self.has_token(&variable.to_string())
    }

    /// Whether the token at `position` is the given switch.
    pub fn is_switch_at(&self, position: usize, switch: impl Into<Switch>) -> bool {
        self.get(position) == Some(switch.into().to_string().as_str())
    }

    /// Whether the first token equals `token`.
    pub fn starts_with(&self, token: &str) -> bool {
        !self.is_empty() && self.token_at(0) == token
    }

    /// Whether the first token is the given switch.
    pub fn starts_with_switch(&self, switch: impl Into<Switch>) -> bool {
        !self.is_empty() && self.starts_with(&switch.into().to_string())
    }

    /// Whether the first token is the rendered variable.
    pub fn starts_with_variable(&self, variable: &Variable) -> bool {
        !self.is_empty() && self.starts_with(&variable.to_string())
    }

    /// Whether the last token equals `token`.
    pub fn ends_with(&self, token: &str) -> bool {
        let last = self.len().saturating_sub(1);
        !self.is_empty() && self.token_at(last) == token
    }

    /// Whether the last token is the given switch.
    pub fn ends_with_switch(&self, switch: impl Into<Switch>) -> bool {
        !self.is_empty() && self.ends_with(&switch.into().to_string())
    }

    /// Whether the last token is the rendered variable.
    pub fn ends_with_variable(&self, variable: &Variable) -> bool {
        !self.is_empty() && self.ends_with(&variable.to_string())
    }

    /// Position of the first token equal to `token`.
    pub fn index_of(&self, token: &str) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.tokens.iter().position(|t| t == token)
    }

    /// Position of the first occurrence of the switch.
    pub fn index_of_switch(&self, switch: impl Into<Switch>) -> Option<usize> {
        self.index_of(&switch.into().to_string())
    }

    /// Position of the first occurrence of the rendered variable.
    pub fn index_of_variable(&self, variable: &Variable) -> Option<usize> {
        self.index_of(&variable.to_string())
    }

    /// The token right after the first occurrence of the switch.
    ///
    /// Returns `""` when the switch is the last token. What happens when the
    /// switch is absent depends on the [`LookupMode`].
    pub fn argument_after_switch(&self, switch: impl Into<Switch>) -> &str {
        let index = match self.index_of_switch(switch) {
            Some(index) => index,
            None if self.lookup == LookupMode::Strict => return "",
            None => 0,
        };
        let next = (index + 1).min(self.len());
        self.token_at(next)
    }
}

impl From<Vec<String>> for ArgumentVector {
    fn from(tokens: Vec<String>) -> Self {
        Self::new(tokens)
    }
}

impl From<Option<Vec<String>>> for ArgumentVector {
    fn from(tokens: Option<Vec<String>>) -> Self {
        tokens.map(Self::from).unwrap_or_default()
    }
}
