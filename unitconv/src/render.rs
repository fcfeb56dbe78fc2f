//! Markdown renderer for session history

use unitconv_core::{ConversionRecord, DEFAULT_PRECISION};
use crate::history::HistoryLog;

/// History renderer
pub struct Renderer {
    precision: usize,
}

impl Renderer {
    pub fn new() -> Self {
        Self { precision: DEFAULT_PRECISION }
    }

    /// Renderer showing results with `precision` decimal places
    pub fn with_precision(precision: usize) -> Self {
        Self { precision }
    }

    /// Render history as a markdown table, oldest first
    pub fn history_table(&self, history: &HistoryLog) -> String {
        let mut output = String::new();

        output.push_str("| # | value | from | result | to |\n");
        output.push_str("|---|-------|------|--------|----|\n");

        for (index, record) in history.iter().enumerate() {
            output.push_str(&self.render_row(index + 1, record));
        }

        output
    }

    fn render_row(&self, position: usize, record: &ConversionRecord) -> String {
        format!("| {} | {} | {} | {:.*} | {} |\n",
            position, record.input, record.from, self.precision, record.result, record.to)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
