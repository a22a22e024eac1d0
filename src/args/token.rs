//! Token shapes: switches, variables and positional values.
//!
//! A token's shape is decided by its literal prefix alone. No registry
//! lookup is involved.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static WINDOWS_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^%([^%]+)%$").expect("valid variable pattern"));

static POSIX_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$\{([^{}]+)\}$").expect("valid variable pattern"));

/// Lexical shape of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `--name`
    LongSwitch,
    /// `-c`
    ShortSwitch,
    /// `-abc`, several short switches packed together.
    ChainedSwitch,
    /// `%name%` or `${name}`
    Variable(VariableStyle),
    /// Anything else.
    Positional,
}

impl TokenKind {
    /// Classify a token by its literal shape.
    pub fn classify(token: &str) -> Self {
        if let Some(body) = token.strip_prefix("--") {
            return if body.is_empty() || body.starts_with('-') {
                Self::Positional
            } else {
                Self::LongSwitch
            };
        }

        if let Some(body) = token.strip_prefix('-') {
            return match body.chars().count() {
                0 => Self::Positional,
                1 => Self::ShortSwitch,
                _ => Self::ChainedSwitch,
            };
        }

        match Variable::parse(token) {
            Some(variable) => Self::Variable(variable.style()),
            None => Self::Positional,
        }
    }

    /// Whether this shape is any kind of switch.
    pub fn is_switch(&self) -> bool {
        matches!(
            self,
            Self::LongSwitch | Self::ShortSwitch | Self::ChainedSwitch
        )
    }

    /// Short label used when listing tokens.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LongSwitch => "long switch",
            Self::ShortSwitch => "short switch",
            Self::ChainedSwitch => "chained switch",
            Self::Variable(VariableStyle::Windows) => "variable (%name%)",
            Self::Variable(VariableStyle::Posix) => "variable (${name})",
            Self::Positional => "value",
        }
    }
}

/// A switch to search for.
///
/// `From<&str>` builds a long switch and `From<char>` a short one, so
/// query methods accept either `"foreground"` or `'f'`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Switch {
    /// Rendered as `--name`.
    Long(String),
    /// Rendered as `-c`.
    Short(char),
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long(name) => write!(f, "--{}", name),
            Self::Short(c) => write!(f, "-{}", c),
        }
    }
}

impl From<char> for Switch {
    fn from(c: char) -> Self {
        Self::Short(c)
    }
}

impl From<&str> for Switch {
    fn from(name: &str) -> Self {
        Self::Long(name.to_string())
    }
}

impl From<String> for Switch {
    fn from(name: String) -> Self {
        Self::Long(name)
    }
}

/// Surface syntax of a variable token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableStyle {
    /// `%name%`
    Windows,
    /// `${name}`
    Posix,
}

/// A variable placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    style: VariableStyle,
    name: String,
}

impl Variable {
    /// Create a variable with an explicit style.
    pub fn new(style: VariableStyle, name: impl Into<String>) -> Self {
        Self {
            style,
            name: name.into(),
        }
    }

    /// `%name%`
    pub fn windows(name: impl Into<String>) -> Self {
        Self::new(VariableStyle::Windows, name)
    }

    /// `${name}`
    pub fn posix(name: impl Into<String>) -> Self {
        Self::new(VariableStyle::Posix, name)
    }

    /// Parse a whole token as a variable.
    pub fn parse(token: &str) -> Option<Self> {
        if let Some(caps) = WINDOWS_VARIABLE.captures(token) {
            return Some(Self::windows(&caps[1]));
        }
        POSIX_VARIABLE
            .captures(token)
            .map(|caps| Self::posix(&caps[1]))
    }

    /// The bare variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The variable's surface syntax.
    pub fn style(&self) -> VariableStyle {
        self.style
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            VariableStyle::Windows => write!(f, "%{}%", self.name),
            VariableStyle::Posix => write!(f, "${{{}}}", self.name),
        }
    }
}
