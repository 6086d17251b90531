//! Markdown table model.

/// A GFM-style table parsed from a markdown source.
///
/// Row 0 is the header row. Line indices are zero-based positions in the
/// source document; `start_line <= end_line` always holds for a parsed
/// table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Rows of trimmed cell text, header first.
    pub rows: Vec<Vec<String>>,

    /// Line index of the header row.
    pub start_line: usize,

    /// Line index of the last consumed row.
    pub end_line: usize,
}

impl Table {
    /// Get the number of rows, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on the header row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.len()).unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the data rows (everything after the header).
    pub fn body(&self) -> &[Vec<String>] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let table = Table {
            rows: vec![
                vec!["Field".to_string(), "Value".to_string()],
                vec!["Premium".to_string(), "$1,200".to_string()],
            ],
            start_line: 0,
            end_line: 2,
        };
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.body().len(), 1);
        assert!(!table.is_empty());
    }
}
