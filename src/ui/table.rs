//! Table rendering for formatted output.

use console::{measure_text_width, pad_str, Alignment};

/// A simple bordered table.
///
/// Column widths are measured on visible text, so styled cells align.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: &[&str]) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row. Cells beyond the header count are dropped.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (width, cell) in self.column_widths.iter_mut().zip(&row) {
            *width = (*width).max(measure_text_width(cell));
        }
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut lines = vec![
            self.render_border('┌', '┬', '┐'),
            self.render_row(&self.headers),
            self.render_border('├', '┼', '┤'),
        ];
        lines.extend(self.rows.iter().map(|row| self.render_row(row)));
        lines.push(self.render_border('└', '┴', '┘'));
        lines.join("\n")
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self
            .column_widths
            .iter()
            .map(|w| "─".repeat(w + 2))
            .collect();
        format!("{}{}{}", left, segments.join(mid.to_string().as_str()), right)
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::from("│");
        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            s.push(' ');
            s.push_str(&pad_str(cell, *width, Alignment::Left, None));
            s.push_str(" │");
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_renders_headers() {
        let table = Table::new(&["Variable", "Value"]);
        assert!(table.is_empty());

        let output = table.render();
        assert!(output.contains("Variable"));
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn renders_aligned_rows() {
        let mut table = Table::new(&["A", "B"]);
        table.add_row(vec!["long value".to_string(), "x".to_string()]);
        table.add_row(vec!["s".to_string(), "y".to_string()]);

        let output = table.render();
        let widths: Vec<usize> = output.lines().map(measure_text_width).collect();

        assert_eq!(table.row_count(), 2);
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn short_rows_are_padded() {
        let mut table = Table::new(&["A", "B"]);
        table.add_row(vec!["only".to_string()]);

        assert!(table.render().contains("│ only │   │"));
    }
}
