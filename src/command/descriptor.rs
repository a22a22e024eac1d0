//! Static command identity.

/// Name, aliases, help summary and visibility of a command.
///
/// Built once when the command set is assembled and never changed after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    name: String,
    aliases: Vec<String>,
    summary: String,
    hidden: bool,
}

impl CommandDescriptor {
    /// Create a visible descriptor without aliases.
    pub fn new(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            summary: summary.into(),
            hidden: false,
        }
    }

    /// Add aliases.
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Exclude the command from listings. It stays invocable by name.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Canonical name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternative names.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// One-line help text.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Whether listings skip this command.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// The canonical name followed by every alias.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Whether `key` is the name or one of the aliases (case-sensitive).
    pub fn answers_to(&self, key: &str) -> bool {
        self.keys().any(|k| k == key)
    }
}
