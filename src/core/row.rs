//! Row access over spreadsheet cells.

/// Read access to the cells of one spreadsheet row, by column name.
///
/// Backed by whatever the source hands out: a header-keyed record from a CSV
/// file, a value range from the Sheets API, or a plain map in tests.
pub trait RowAccessor {
    /// Cell value for `column`, or `None` when the column is missing.
    fn get(&self, column: &str) -> Option<&str>;

    /// Cell value for `column`, treating an empty cell as missing.
    fn non_empty(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|value| !value.is_empty())
    }
}

/// One spreadsheet row: ordered (column, value) pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: Vec<(String, String)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair a header row with a record. Missing trailing cells are left out,
    /// extra cells without a header are dropped.
    pub fn from_record<H, C>(headers: &[H], cells: &[C]) -> Self
    where
        H: AsRef<str>,
        C: AsRef<str>,
    {
        let cells = headers
            .iter()
            .zip(cells)
            .filter(|(header, _)| !header.as_ref().is_empty())
            .map(|(header, cell)| (header.as_ref().to_string(), cell.as_ref().to_string()))
            .collect();
        Self { cells }
    }

    pub fn with(mut self, column: &str, value: &str) -> Self {
        self.insert(column, value);
        self
    }

    /// Set a cell, replacing an existing value for the same column.
    pub fn insert(&mut self, column: &str, value: &str) {
        match self.cells.iter_mut().find(|(name, _)| name == column) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.cells.push((column.to_string(), value.to_string())),
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }
}

impl RowAccessor for RawRow {
    fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for RawRow {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .fold(RawRow::new(), |row, (column, value)| row.with(column, value))
    }
}
