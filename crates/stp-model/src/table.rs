//! In-memory representation of an uploaded spreadsheet.

/// Canonical form of a column name for matching: trimmed, inner whitespace
/// collapsed, uppercased.
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Rows of optional text cells under an ordered header.
///
/// Every row holds exactly one cell per header; short rows are padded with
/// missing cells and long rows truncated when pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputTable {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl InputTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, mut cells: Vec<Option<String>>) {
        cells.resize(self.headers.len(), None);
        self.rows.push(cells);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Header names in canonical uppercase form, in column order.
    pub fn normalized_headers(&self) -> Vec<String> {
        self.headers
            .iter()
            .map(|header| normalize_column_name(header))
            .collect()
    }

    /// Index of the first column whose canonical name equals `name`'s.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = normalize_column_name(name);
        self.headers
            .iter()
            .position(|header| normalize_column_name(header) == wanted)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<String>]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Cell text, `None` when missing or out of range.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .and_then(Option::as_deref)
    }
}
