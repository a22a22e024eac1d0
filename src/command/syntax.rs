//! Usage reports shown when a command rejects its arguments.

use console::measure_text_width;

/// The notation legend appended to every usage report.
pub const LEGEND: [&str; 4] = [
    "Legend:",
    "<>: Required Argument",
    "[]: Optional Argument",
    "|: One OR the other",
];

/// Usage report for one failed invocation.
///
/// `command_name` is the name exactly as typed, which may be an alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorReport {
    command_name: String,
    usage: Vec<String>,
    width: usize,
}

impl SyntaxErrorReport {
    /// Build a report from command-specific usage lines.
    ///
    /// Entries containing newlines are split so every stored line is a
    /// single display line.
    pub fn new<I, S>(command_name: impl Into<String>, usage: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let usage: Vec<String> = usage
            .into_iter()
            .flat_map(|entry| {
                entry
                    .as_ref()
                    .lines()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        let width = max_width(usage.iter().map(String::as_str).chain(LEGEND));

        Self {
            command_name: command_name.into(),
            usage,
            width,
        }
    }

    /// The legend text and its widest line.
    pub fn legend() -> (String, usize) {
        (LEGEND.join("\n"), max_width(LEGEND))
    }

    /// The command name as typed.
    pub fn command_name(&self) -> &str {
        &self.command_name
    }

    /// Command-specific usage lines.
    pub fn usage(&self) -> &[String] {
        &self.usage
    }

    /// Display width of the widest usage or legend line.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Usage lines, a blank line, then the legend.
    pub fn lines(&self) -> Vec<&str> {
        let mut lines: Vec<&str> = self.usage.iter().map(String::as_str).collect();
        if !lines.is_empty() {
            lines.push("");
        }
        lines.extend(LEGEND);
        lines
    }

    /// The report as one string.
    pub fn render(&self) -> String {
        self.lines().join("\n")
    }
}

fn max_width<'a>(lines: impl IntoIterator<Item = &'a str>) -> usize {
    lines.into_iter().map(measure_text_width).max().unwrap_or(0)
}
