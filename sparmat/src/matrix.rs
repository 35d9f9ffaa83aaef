//! Matrix facade over the dynamic and compressed stores
//!
//! The facade owns the dimensions and exactly one live store, and
//! dispatches every public operation on whichever representation is
//! active. The mode only flips inside `compress`/`uncompress`, which move
//! the data into a fresh store of the other kind and discard the source.

use core::fmt;
use std::collections::BTreeMap;
use std::path::Path;

use sparmat_core::{
    Dimensions, DynamicStorage, NormKind, Result, Scalar, SparseAccess, SparseError, StorageOrder,
};

use crate::convert;
use crate::coo_list::CooList;
use crate::csx::Csx;
use crate::market;
use crate::RowMajor;

/// The one live representation
#[derive(Debug, Clone)]
enum Repr<T, O, D> {
    Dynamic(D),
    Compressed(Csx<T, O>),
}

/// Sparse matrix with interchangeable dynamic and compressed storage
///
/// `O` fixes the row/column-major convention shared by both stores; `D`
/// selects the dynamic back-end ([`CooList`] or
/// [`CooMap`](crate::coo_map::CooMap)).
#[derive(Debug, Clone)]
pub struct Matrix<T, O = RowMajor, D = CooList<T, O>> {
    dims: Dimensions,
    repr: Repr<T, O, D>,
}

impl<T, O, D> Matrix<T, O, D>
where
    T: Scalar,
    O: StorageOrder,
    D: DynamicStorage<T, O>,
{
    /// Empty matrix in dynamic mode with the given dimensions
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            dims: Dimensions::new(rows, columns),
            repr: Repr::Dynamic(D::from_sorted(core::iter::empty())),
        }
    }

    /// Dynamic-mode matrix from parallel coordinate/value slices,
    /// dimensions inferred from the data
    pub fn from_triplets(coords: &[(usize, usize)], values: &[T]) -> Result<Self> {
        let (store, dims) = D::from_triplets(None, coords, values)?;
        Ok(Self {
            dims,
            repr: Repr::Dynamic(store),
        })
    }

    /// Dynamic-mode matrix from slices with declared dimensions
    pub fn from_triplets_with_dims(
        rows: usize,
        columns: usize,
        coords: &[(usize, usize)],
        values: &[T],
    ) -> Result<Self> {
        let (store, dims) = D::from_triplets(Some(Dimensions::new(rows, columns)), coords, values)?;
        Ok(Self {
            dims,
            repr: Repr::Dynamic(store),
        })
    }

    /// Dynamic-mode matrix from an associative coordinate-to-value input,
    /// dimensions inferred from the data
    pub fn from_map(entries: &BTreeMap<(usize, usize), T>) -> Result<Self> {
        let (store, dims) = D::from_map(None, entries)?;
        Ok(Self {
            dims,
            repr: Repr::Dynamic(store),
        })
    }

    /// Dynamic-mode matrix from an associative input with declared
    /// dimensions
    pub fn from_map_with_dims(
        rows: usize,
        columns: usize,
        entries: &BTreeMap<(usize, usize), T>,
    ) -> Result<Self> {
        let (store, dims) = D::from_map(Some(Dimensions::new(rows, columns)), entries)?;
        Ok(Self {
            dims,
            repr: Repr::Dynamic(store),
        })
    }

    /// Compressed-mode matrix from pointer-index-value parts, dimensions
    /// inferred from the arrays
    pub fn from_parts(indices: &[usize], pointers: &[usize], values: &[T]) -> Result<Self> {
        let (store, dims) = Csx::from_parts(None, indices, pointers, values)?;
        Ok(Self {
            dims,
            repr: Repr::Compressed(store),
        })
    }

    /// Compressed-mode matrix from parts with declared dimensions
    pub fn from_parts_with_dims(
        rows: usize,
        columns: usize,
        indices: &[usize],
        pointers: &[usize],
        values: &[T],
    ) -> Result<Self> {
        let (store, dims) = Csx::from_parts(
            Some(Dimensions::new(rows, columns)),
            indices,
            pointers,
            values,
        )?;
        Ok(Self {
            dims,
            repr: Repr::Compressed(store),
        })
    }

    /// Dynamic-mode matrix read from a Matrix Market exchange file
    pub fn from_market_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = market::read_market_file::<T, P>(path)?;
        let coords: Vec<(usize, usize)> = data.entries.iter().map(|t| (t.row, t.col)).collect();
        let values: Vec<T> = data.entries.iter().map(|t| t.value).collect();
        let (store, dims) = D::from_triplets(Some(data.dimensions), &coords, &values)?;
        Ok(Self {
            dims,
            repr: Repr::Dynamic(store),
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.dims.rows()
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.dims.columns()
    }

    /// Both extents as (rows, columns)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.dims.rows(), self.dims.columns())
    }

    /// Number of stored non-zero entries
    pub fn nnz(&self) -> usize {
        match &self.repr {
            Repr::Dynamic(store) => store.nnz(),
            Repr::Compressed(store) => store.nnz(),
        }
    }

    /// True when the compressed store is the live one
    pub fn is_compressed(&self) -> bool {
        matches!(self.repr, Repr::Compressed(_))
    }

    /// Stored value at the coordinate, or zero when absent
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        if !self.dims.contains(row, col) {
            return Err(SparseError::OutOfBounds);
        }
        Ok(match &self.repr {
            Repr::Dynamic(store) => store.get(row, col),
            Repr::Compressed(store) => store.get(row, col),
        })
    }

    /// Mutable reference to the entry, inserting an explicit zero when the
    /// coordinate is absent
    ///
    /// In compressed mode the insertion shifts the index/value arrays and
    /// the trailing pointers, so it costs O(nnz); dynamic mode is the
    /// cheap path for repeated mutation.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        if !self.dims.contains(row, col) {
            return Err(SparseError::OutOfBounds);
        }
        Ok(match &mut self.repr {
            Repr::Dynamic(store) => store.entry(row, col),
            Repr::Compressed(store) => store.entry(row, col),
        })
    }

    /// Store a value at the coordinate
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Delete the entry if present
    pub fn remove(&mut self, row: usize, col: usize) -> Result<bool> {
        if !self.dims.contains(row, col) {
            return Err(SparseError::OutOfBounds);
        }
        Ok(match &mut self.repr {
            Repr::Dynamic(store) => store.remove(row, col),
            Repr::Compressed(store) => store.remove(row, col),
        })
    }

    /// Change the declared extents
    ///
    /// The compressed pointer array is tied to the primary extent, so
    /// resizing requires dynamic mode. Fails with `OutOfBounds` when a
    /// stored entry would fall outside the new extents.
    pub fn resize(&mut self, rows: usize, columns: usize) -> Result<()> {
        let store = match &self.repr {
            Repr::Dynamic(store) => store,
            Repr::Compressed(_) => return Err(SparseError::InvalidState),
        };
        let needed = store.min_extents();
        if needed.rows() > rows || needed.columns() > columns {
            return Err(SparseError::OutOfBounds);
        }
        self.dims.resize(rows, columns);
        Ok(())
    }

    /// Norm of the matrix
    pub fn norm(&self, kind: NormKind) -> f64 {
        match &self.repr {
            Repr::Dynamic(store) => store.norm(kind, &self.dims),
            Repr::Compressed(store) => store.norm(kind, &self.dims),
        }
    }

    /// Matrix-vector product
    pub fn multiply(&self, rhs: &[T]) -> Result<Vec<T>> {
        if rhs.len() != self.dims.columns() {
            return Err(SparseError::SizeMismatch);
        }
        Ok(match &self.repr {
            Repr::Dynamic(store) => store.multiply(&self.dims, rhs),
            Repr::Compressed(store) => store.multiply(&self.dims, rhs),
        })
    }

    /// Move the data into the compressed store
    ///
    /// Fails with `InvalidState` when the matrix is already compressed;
    /// the matrix is left untouched in that case.
    pub fn compress(&mut self) -> Result<()> {
        let placeholder = Repr::Dynamic(D::from_sorted(core::iter::empty()));
        match core::mem::replace(&mut self.repr, placeholder) {
            Repr::Dynamic(store) => {
                self.repr = Repr::Compressed(convert::compress_store(&self.dims, store));
                Ok(())
            }
            Repr::Compressed(store) => {
                self.repr = Repr::Compressed(store);
                Err(SparseError::InvalidState)
            }
        }
    }

    /// Move the data back into a fresh dynamic store
    ///
    /// Fails with `InvalidState` when the matrix is already dynamic; the
    /// matrix is left untouched in that case.
    pub fn uncompress(&mut self) -> Result<()> {
        let placeholder = Repr::Dynamic(D::from_sorted(core::iter::empty()));
        match core::mem::replace(&mut self.repr, placeholder) {
            Repr::Compressed(store) => {
                self.repr = Repr::Dynamic(convert::uncompress_store(store));
                Ok(())
            }
            Repr::Dynamic(store) => {
                self.repr = Repr::Dynamic(store);
                Err(SparseError::InvalidState)
            }
        }
    }
}

impl<T, O, D> fmt::Display for Matrix<T, O, D>
where
    T: Scalar + fmt::Display,
    O: StorageOrder,
    D: DynamicStorage<T, O>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dims.rows() {
            for col in 0..self.dims.columns() {
                if col > 0 {
                    write!(f, " ")?;
                }
                let value = match &self.repr {
                    Repr::Dynamic(store) => store.get(row, col),
                    Repr::Compressed(store) => store.get(row, col),
                };
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ListMatrix, MapMatrix};
    use sparmat_core::ColMajor;

    #[test]
    fn test_invalid_state_transitions() {
        let mut m: ListMatrix<f64> =
            ListMatrix::from_triplets(&[(0, 0), (1, 1)], &[1.0, 2.0]).unwrap();
        assert!(!m.is_compressed());
        assert_eq!(m.uncompress().unwrap_err(), SparseError::InvalidState);

        m.compress().unwrap();
        assert!(m.is_compressed());
        assert_eq!(m.compress().unwrap_err(), SparseError::InvalidState);

        // a failed transition leaves the data intact
        assert_eq!(m.get(1, 1).unwrap(), 2.0);
    }

    #[test]
    fn test_bounds_checked_access() {
        let m: ListMatrix<f64> = ListMatrix::from_triplets(&[(0, 0)], &[1.0]).unwrap();
        assert_eq!(m.get(1, 0).unwrap_err(), SparseError::OutOfBounds);

        let mut m = m;
        assert_eq!(m.set(0, 7, 2.0).unwrap_err(), SparseError::OutOfBounds);
        assert_eq!(m.remove(9, 9).unwrap_err(), SparseError::OutOfBounds);
    }

    #[test]
    fn test_set_get_remove_both_modes() {
        let mut m: MapMatrix<i64, ColMajor> = MapMatrix::new(3, 3);
        m.set(0, 1, 5).unwrap();
        assert_eq!(m.get(0, 1).unwrap(), 5);

        m.compress().unwrap();
        m.set(2, 2, 7).unwrap();
        assert_eq!(m.get(2, 2).unwrap(), 7);
        assert_eq!(m.nnz(), 2);

        assert!(m.remove(0, 1).unwrap());
        assert!(!m.remove(0, 1).unwrap());
        assert_eq!(m.get(0, 1).unwrap(), 0);
    }

    #[test]
    fn test_resize() {
        let mut m: ListMatrix<f64> =
            ListMatrix::from_triplets(&[(0, 0), (2, 2)], &[1.0, 2.0]).unwrap();
        assert_eq!(m.dimensions(), (3, 3));

        m.resize(5, 4).unwrap();
        assert_eq!(m.dimensions(), (5, 4));
        assert_eq!(m.get(4, 3).unwrap(), 0.0);

        // cannot shrink below a stored entry
        assert_eq!(m.resize(2, 3).unwrap_err(), SparseError::OutOfBounds);

        m.compress().unwrap();
        assert_eq!(m.resize(6, 6).unwrap_err(), SparseError::InvalidState);
    }

    #[test]
    fn test_multiply_size_mismatch() {
        let m: ListMatrix<f64> =
            ListMatrix::from_triplets(&[(0, 0), (0, 1)], &[1.0, 2.0]).unwrap();
        assert_eq!(
            m.multiply(&[1.0]).unwrap_err(),
            SparseError::SizeMismatch
        );
    }

    #[test]
    fn test_display_dense_grid() {
        let m: ListMatrix<i32> =
            ListMatrix::from_triplets_with_dims(2, 3, &[(0, 0), (1, 2)], &[1, 2]).unwrap();
        assert_eq!(m.to_string(), "1 0 0\n0 0 2\n");
    }
}
