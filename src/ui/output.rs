//! Output verbosity.

use std::str::FromStr;

use serde::Deserialize;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Show everything, including script run summaries.
    Verbose,
    /// Show command output and status messages.
    #[default]
    Normal,
    /// Show command output but no headers or success notes.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            "silent" => Ok(Self::Silent),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode shows plain command output.
    pub fn shows_messages(&self) -> bool {
        !matches!(self, Self::Silent)
    }

    /// Check if this mode shows headers, banners and success notes.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows extra detail.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
