//! Host session state.
//!
//! One [`Session`] is owned by the host and passed by `&mut` into every
//! invocation. It holds who and where the user is, shell variables, the
//! selected console colours, script nesting and the exit flag.

mod palette;

pub use palette::ShellColor;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Result, ShellError};

/// Deepest allowed chain of scripts running scripts.
pub const MAX_SCRIPT_DEPTH: usize = 16;

/// Mutable state shared by the prompt and the commands it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: String,
    machine: String,
    directory: PathBuf,
    variables: BTreeMap<String, String>,
    foreground: Option<ShellColor>,
    background: Option<ShellColor>,
    script_depth: usize,
    script_eol: String,
    exit_requested: bool,
}

impl Session {
    /// Create a session with explicit identity.
    pub fn new(
        user: impl Into<String>,
        machine: impl Into<String>,
        directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            user: user.into(),
            machine: machine.into(),
            directory: directory.into(),
            variables: BTreeMap::new(),
            foreground: None,
            background: None,
            script_depth: 0,
            script_eol: "\n".to_string(),
            exit_requested: false,
        }
    }

    /// Create a session from the process environment.
    pub fn from_env() -> Self {
        let user = first_env(&["USER", "USERNAME"]).unwrap_or_else(|| "user".to_string());
        let machine = first_env(&["HOSTNAME", "COMPUTERNAME"])
            .or_else(|| {
                std::fs::read_to_string("/etc/hostname")
                    .ok()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
            })
            .unwrap_or_else(|| "localhost".to_string());
        let directory = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(user, machine, directory)
    }

    /// Current user name.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Replace the user name.
    pub fn set_user(&mut self, user: impl Into<String>) {
        self.user = user.into();
    }

    /// Machine name.
    pub fn machine(&self) -> &str {
        &self.machine
    }

    /// Replace the machine name.
    pub fn set_machine(&mut self, machine: impl Into<String>) {
        self.machine = machine.into();
    }

    /// Working directory of the session.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Change the working directory. Relative paths resolve against the
    /// current one.
    pub fn set_directory(&mut self, directory: impl AsRef<Path>) {
        self.directory = self.resolve_path(directory);
    }

    /// Resolve a path against the session directory.
    pub fn resolve_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.directory.join(path)
        }
    }

    /// Value of a shell variable.
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Assign a shell variable.
    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Remove a shell variable, returning its old value.
    pub fn remove_variable(&mut self, name: &str) -> Option<String> {
        self.variables.remove(name)
    }

    /// All shell variables in name order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Selected foreground colour.
    pub fn foreground(&self) -> Option<ShellColor> {
        self.foreground
    }

    /// Select a foreground colour.
    pub fn set_foreground(&mut self, color: ShellColor) {
        self.foreground = Some(color);
    }

    /// Selected background colour.
    pub fn background(&self) -> Option<ShellColor> {
        self.background
    }

    /// Select a background colour.
    pub fn set_background(&mut self, color: ShellColor) {
        self.background = Some(color);
    }

    /// Ask the dispatch loop to stop after the current line.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    /// Whether a command asked the loop to stop.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// How many scripts are currently running inside each other.
    pub fn script_depth(&self) -> usize {
        self.script_depth
    }

    /// Record that a script starts running.
    pub fn enter_script(&mut self) -> Result<()> {
        if self.script_depth >= MAX_SCRIPT_DEPTH {
            return Err(ShellError::ScriptDepthExceeded {
                depth: MAX_SCRIPT_DEPTH,
            });
        }
        self.script_depth += 1;
        Ok(())
    }

    /// Line delimiter for script files.
    pub fn script_eol(&self) -> &str {
        &self.script_eol
    }

    /// Change the script line delimiter.
    pub fn set_script_eol(&mut self, eol: impl Into<String>) {
        self.script_eol = eol.into();
    }

    /// Record that a script finished.
    pub fn leave_script(&mut self) {
        self.script_depth = self.script_depth.saturating_sub(1);
    }

    /// Prompt text, e.g. `[$admin@box]: /home/admin > `.
    pub fn banner(&self) -> String {
        format!(
            "[${}@{}]: {} > ",
            self.user,
            self.machine,
            self.directory.display()
        )
    }
}

fn first_env(keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| std::env::var(k).ok())
        .find(|v| !v.trim().is_empty())
}
