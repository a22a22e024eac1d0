//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use desmin::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! // Use ui in code under test...
//! ui.message("hello");
//! ui.success("Done!");
//!
//! // Assert on captured interactions
//! assert!(ui.messages().contains(&"hello".to_string()));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use crate::command::SyntaxErrorReport;

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions, including prompts and usage reports.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    prompts: Vec<String>,
    usages: Vec<SyntaxErrorReport>,
    screen_clears: usize,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get every prompt banner that was shown.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Get every usage report that was shown.
    pub fn usages(&self) -> &[SyntaxErrorReport] {
        &self.usages
    }

    /// How many times the screen was cleared.
    pub fn screen_clears(&self) -> usize {
        self.screen_clears
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.headers.clear();
        self.prompts.clear();
        self.usages.clear();
        self.screen_clears = 0;
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_prompt(&mut self, banner: &str) {
        self.prompts.push(banner.to_string());
    }

    fn show_usage(&mut self, report: &SyntaxErrorReport) {
        self.usages.push(report.clone());
    }

    fn clear_screen(&mut self) {
        self.screen_clears += 1;
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }
}
