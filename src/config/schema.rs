//! Configuration schema definitions for Desmin.
//!
//! This module contains the struct definitions that map to
//! the YAML configuration file format.

use serde::Deserialize;
use std::path::PathBuf;

use crate::args::LookupMode;
use crate::session::Session;
use crate::ui::OutputMode;

/// Root configuration structure for `.desmin/config.yml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Shell behaviour settings
    pub settings: Settings,

    /// Identity overrides applied on top of the process environment
    pub session: SessionOverrides,
}

impl ShellConfig {
    /// Lookup mode for `argument_after_switch`.
    pub fn lookup_mode(&self) -> LookupMode {
        if self.settings.strict_not_found {
            LookupMode::Strict
        } else {
            LookupMode::Lenient
        }
    }

    /// Apply the configured overrides and script delimiter to a session.
    pub fn apply(&self, session: &mut Session) {
        session.set_script_eol(self.settings.script_eol.clone());
        if let Some(user) = &self.session.user {
            session.set_user(user.clone());
        }
        if let Some(machine) = &self.session.machine {
            session.set_machine(machine.clone());
        }
        if let Some(directory) = &self.session.directory {
            session.set_directory(directory);
        }
    }
}

/// Global shell settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Return the empty sentinel at once when a looked-up switch is absent
    pub strict_not_found: bool,

    /// Print the banner before each line is read
    pub echo_prompt: bool,

    /// Output mode: verbose, normal, quiet, silent
    pub output: OutputMode,

    /// Line delimiter used when reading script files
    pub script_eol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strict_not_found: false,
            echo_prompt: true,
            output: OutputMode::Normal,
            script_eol: "\n".to_string(),
        }
    }
}

/// Optional identity overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionOverrides {
    /// User shown in the banner
    pub user: Option<String>,

    /// Machine shown in the banner
    pub machine: Option<String>,

    /// Starting directory
    pub directory: Option<PathBuf>,
}
