//! GFM-style markdown table parsing.
//!
//! A table begins where a line containing a pipe is followed by a
//! separator row. Data rows run until the first line without a pipe;
//! malformed trailing rows simply terminate the table.

use crate::model::Table;

/// A contiguous run of non-table, non-blank lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    /// Zero-based line index of the first line.
    pub start_line: usize,

    /// Paragraph text, lines joined with single spaces.
    pub text: String,
}

/// Separator rows contain only pipes, hyphens, colons, and whitespace,
/// with at least one hyphen.
fn is_separator_row(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && trimmed.contains('-')
        && trimmed
            .chars()
            .all(|c| c == '|' || c == '-' || c == ':' || c.is_whitespace())
}

/// Split a table line into trimmed cells, dropping enclosing pipes.
fn split_row(line: &str) -> Vec<String> {
    let mut inner = line.trim();
    inner = inner.strip_prefix('|').unwrap_or(inner);
    inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// Parse every markdown table in `text`, in document order.
///
/// Each returned [`Table`] records the line span it was parsed from;
/// scanning resumes after a table, so a line never starts two tables.
pub fn parse_tables(text: &str) -> Vec<Table> {
    let lines: Vec<&str> = text.lines().collect();
    let mut tables = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if lines[i].contains('|') && i + 1 < lines.len() && is_separator_row(lines[i + 1]) {
            let start_line = i;
            let mut rows = vec![split_row(lines[i])];
            // Separator counts as consumed even when no data rows follow.
            let mut end_line = i + 1;

            let mut j = i + 2;
            while j < lines.len() && lines[j].contains('|') {
                rows.push(split_row(lines[j]));
                end_line = j;
                j += 1;
            }

            tables.push(Table {
                rows,
                start_line,
                end_line,
            });
            i = end_line + 1;
        } else {
            i += 1;
        }
    }

    tables
}

/// Collect the non-table paragraphs of a markdown document.
///
/// Lines inside any table's span and blank lines break paragraphs; the
/// remaining contiguous runs are returned in document order.
pub fn paragraphs(text: &str, tables: &[Table]) -> Vec<Paragraph> {
    let lines: Vec<&str> = text.lines().collect();
    let mut in_table = vec![false; lines.len()];
    for table in tables {
        let last = table.end_line.min(lines.len().saturating_sub(1));
        for flag in &mut in_table[table.start_line..=last] {
            *flag = true;
        }
    }

    let mut out = Vec::new();
    let mut current: Option<(usize, Vec<&str>)> = None;
    for (idx, line) in lines.iter().enumerate() {
        if in_table[idx] || line.trim().is_empty() {
            if let Some((start_line, parts)) = current.take() {
                out.push(Paragraph {
                    start_line,
                    text: parts.join(" "),
                });
            }
        } else {
            current
                .get_or_insert_with(|| (idx, Vec::new()))
                .1
                .push(line.trim());
        }
    }
    if let Some((start_line, parts)) = current.take() {
        out.push(Paragraph {
            start_line,
            text: parts.join(" "),
        });
    }

    out
}
