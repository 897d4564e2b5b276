//! Row filtering and translation key construction.

use super::row::RowAccessor;

pub const DEFAULT_DELIMITER: &str = ".";
pub const DEFAULT_IGNORE_COLUMN: &str = "ignore";
pub const DEFAULT_IGNORE_VALUE: &str = "yes";

/// Marker placed in the first category column to comment a row out.
pub const COMMENT_MARKER: &str = "#";

/// How keys are derived from the category columns of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpec {
    /// Columns joined, in order, to form the key path.
    pub categories: Vec<String>,
    pub delimiter: String,
    /// Column checked against `ignore_value` to skip a row.
    pub ignore_column: String,
    pub ignore_value: String,
}

impl KeySpec {
    pub fn new<S: Into<String>>(categories: impl IntoIterator<Item = S>) -> Self {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            ignore_column: DEFAULT_IGNORE_COLUMN.to_string(),
            ignore_value: DEFAULT_IGNORE_VALUE.to_string(),
        }
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Whether the row is skipped entirely.
    ///
    /// A row is excluded when its first category cell is empty or `#`, or when
    /// its ignore column holds the ignore value (case-sensitive).
    pub fn is_excluded<R: RowAccessor + ?Sized>(&self, row: &R) -> bool {
        let first = self
            .categories
            .first()
            .and_then(|column| row.non_empty(column));

        match first {
            None => true,
            Some(COMMENT_MARKER) => true,
            Some(_) => row.get(&self.ignore_column) == Some(self.ignore_value.as_str()),
        }
    }

    /// Build the translation key for a row, or `None` if the row is excluded.
    ///
    /// Empty category cells are skipped, so `["a", "", "c"]` yields `a.c`.
    pub fn build_key<R: RowAccessor + ?Sized>(&self, row: &R) -> Option<String> {
        if self.is_excluded(row) {
            return None;
        }

        let segments: Vec<&str> = self
            .categories
            .iter()
            .filter_map(|column| row.non_empty(column))
            .collect();

        Some(segments.join(&self.delimiter))
    }
}
