//! User-visible output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for piped input and scripts
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use desmin::ui::{create_ui, OutputMode, UserInterface};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Desmin");
//! ui.success("Ready");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, DesminTheme};

use crate::command::SyntaxErrorReport;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show the prompt banner without a trailing newline.
    fn show_prompt(&mut self, banner: &str);

    /// Show a usage report after a rejected invocation.
    fn show_usage(&mut self, report: &SyntaxErrorReport);

    /// Clear the screen.
    fn clear_screen(&mut self);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;

    /// Change the output mode.
    fn set_output_mode(&mut self, _mode: OutputMode) {}
}

/// Draw a usage report inside a box whose inner width is the report width.
pub fn format_usage_box(report: &SyntaxErrorReport) -> Vec<String> {
    let width = report.width();
    let mut lines = Vec::with_capacity(report.lines().len() + 3);
    let title = format!(" {} ", report.command_name());
    let rule = "─".repeat((width + 2).saturating_sub(console::measure_text_width(&title)));
    lines.push(format!("┌{}{}┐", title, rule));
    for line in report.lines() {
        let pad = width.saturating_sub(console::measure_text_width(line));
        lines.push(format!("│ {}{} │", line, " ".repeat(pad)));
    }
    lines.push(format!("└{}┘", "─".repeat(width + 2)));
    lines
}
