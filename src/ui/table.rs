//! Table rendering for listings such as `help` and `set`.

use console::measure_text_width;

/// A box-drawn table whose columns grow to fit their widest cell.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    widths: Vec<usize>,
}

impl Table {
    /// Create a table with the given column headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let widths = headers.iter().map(|h| measure_text_width(h)).collect();
        Self {
            headers,
            rows: Vec::new(),
            widths,
        }
    }

    /// Append a row. Cells past the last column are dropped, missing
    /// cells render empty.
    pub fn add_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = row.into_iter().map(Into::into).collect();
        row.truncate(self.widths.len());
        for (width, cell) in self.widths.iter_mut().zip(&row) {
            *width = (*width).max(measure_text_width(cell));
        }
        self.rows.push(row);
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render to individual lines, borders included.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.rows.len() + 4);
        out.push(self.border('┌', '┬', '┐'));
        out.push(self.row(&self.headers));
        out.push(self.border('├', '┼', '┤'));
        for row in &self.rows {
            out.push(self.row(row));
        }
        out.push(self.border('└', '┴', '┘'));
        out
    }

    /// Render to a single string.
    pub fn render(&self) -> String {
        self.lines().join("\n")
    }

    fn border(&self, left: char, mid: char, right: char) -> String {
        let inner: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, inner.join(&mid.to_string()), right)
    }

    fn row(&self, cells: &[String]) -> String {
        let mut s = String::from("│");
        for (i, width) in self.widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let pad = width - measure_text_width(cell);
            s.push_str(&format!(" {}{} │", cell, " ".repeat(pad)));
        }
        s
    }
}
