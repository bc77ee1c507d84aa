//! Table rendering utilities for CLI outputs.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cells wider than this are truncated with "..." in the preview.
const MAX_CELL_WIDTH: usize = 40;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render with per-column widths from the data. Widths are display
    /// widths, so umlauts and wide glyphs stay aligned.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        for (i, header) in self.headers.iter().enumerate() {
            push_cell(&mut out, header, widths[i]);
        }
        out.push('\n');
        for width in &widths {
            out.push_str(&"-".repeat(*width));
            out.push(' ');
        }
        out.push('\n');

        for row in &self.rows {
            for (i, width) in widths.iter().enumerate() {
                let value = row.get(i).map(String::as_str).unwrap_or("");
                push_cell(&mut out, value, *width);
            }
            out.push('\n');
        }

        out
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, value) in row.iter().enumerate() {
                if i >= widths.len() {
                    break;
                }
                widths[i] = widths[i].max(value.width().min(MAX_CELL_WIDTH));
            }
        }
        widths
    }
}

fn push_cell(out: &mut String, value: &str, width: usize) {
    let shown = fit_to_width(value, width);
    out.push_str(&shown);
    let pad = width.saturating_sub(shown.width());
    out.push_str(&" ".repeat(pad));
    out.push(' ');
}

fn fit_to_width(value: &str, width: usize) -> String {
    if value.width() <= width {
        return value.to_string();
    }

    let budget = width.saturating_sub(3);
    let mut shown = String::new();
    let mut used = 0;
    for ch in value.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        shown.push(ch);
        used += w;
    }
    shown.push_str("...");
    shown
}
