//! Non-interactive UI for piped input and scripts.

use std::io::Write;

use crate::command::SyntaxErrorReport;

use super::{format_usage_box, OutputMode, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Plain text only. Command output goes to stdout, problems go to stderr.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_prompt(&mut self, banner: &str) {
        if self.mode.shows_status() {
            print!("{}", banner);
            std::io::stdout().flush().ok();
        }
    }

    fn show_usage(&mut self, report: &SyntaxErrorReport) {
        for line in format_usage_box(report) {
            eprintln!("{}", line);
        }
    }

    fn clear_screen(&mut self) {}

    fn is_interactive(&self) -> bool {
        false
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }
}
