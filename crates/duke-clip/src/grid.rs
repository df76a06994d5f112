//! Grid of cell text

/// A cell value. Cells are plain text; numeric-looking values stay text.
pub type Cell = String;

/// An ordered sequence of cells
pub type Row = Vec<Cell>;

/// An ordered sequence of rows.
///
/// Rows may have differing lengths; a grid is never padded or rejected for
/// being ragged, since spreadsheet selections can be ragged at the edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// All rows
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the grid has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by index (0-based)
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Get a cell by row and column (0-based)
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Cell count of the longest row (0 for an empty grid)
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether every row has the same number of cells
    pub fn is_rectangular(&self) -> bool {
        match self.rows.first() {
            Some(first) => self.rows.iter().all(|r| r.len() == first.len()),
            None => true,
        }
    }

    /// Append a row
    pub fn push_row<I, C>(&mut self, cells: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Iterate over rows
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Consume the grid, returning its rows
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl From<Vec<Row>> for Grid {
    fn from(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

impl From<Grid> for Vec<Row> {
    fn from(grid: Grid) -> Self {
        grid.rows
    }
}

impl FromIterator<Row> for Grid {
    fn from_iter<T: IntoIterator<Item = Row>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Grid {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
