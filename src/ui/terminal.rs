//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::command::SyntaxErrorReport;

use super::{
    format_usage_box, should_use_colors, DesminTheme, NonInteractiveUI, OutputMode,
    UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: DesminTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            DesminTheme::new()
        } else {
            DesminTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_prompt(&mut self, banner: &str) {
        self.term.write_str(banner).ok();
        self.term.flush().ok();
    }

    fn show_usage(&mut self, report: &SyntaxErrorReport) {
        let lines = format_usage_box(report);
        let last = lines.len().saturating_sub(1);
        for (i, line) in lines.iter().enumerate() {
            // Frame rows are dimmed, the report text inside stays readable.
            if i == 0 || i == last {
                writeln!(self.term, "{}", self.theme.border.apply_to(line)).ok();
            } else {
                writeln!(self.term, "{}", line).ok();
            }
        }
    }

    fn clear_screen(&mut self) {
        self.term.clear_screen().ok();
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }
}

/// Create the appropriate UI based on interactivity and terminal detection.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
