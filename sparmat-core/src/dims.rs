//! Matrix dimensions
//!
//! Row and column extents shared by every store. Dimensions are either
//! declared up front or inferred from the data as max observed index + 1
//! per axis.

/// Row and column extents of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    rows: usize,
    columns: usize,
}

impl Dimensions {
    /// Create dimensions with the given extents
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Replace both extents
    pub fn resize(&mut self, rows: usize, columns: usize) {
        self.rows = rows;
        self.columns = columns;
    }

    /// True when the coordinate lies inside both extents
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns
    }

    /// Infer dimensions from observed coordinates (max index + 1 per axis)
    ///
    /// An empty stream yields 0x0 dimensions.
    pub fn infer<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut dims = Self::new(0, 0);
        for (row, col) in coords {
            if row + 1 > dims.rows {
                dims.rows = row + 1;
            }
            if col + 1 > dims.columns {
                dims.columns = col + 1;
            }
        }
        dims
    }
}
