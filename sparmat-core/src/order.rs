//! Storage-order comparators
//!
//! A storage order imposes a strict total order over (row, column)
//! coordinate pairs and names the primary (outer) and secondary (inner)
//! axis of that convention. Every store is parameterized by one of the two
//! marker types so sorting, binary search, and map keys all agree on the
//! same order.

use core::cmp::Ordering;

use crate::dims::Dimensions;

/// The matrix norms supported by every store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NormKind {
    /// Maximum absolute column sum
    One,
    /// Maximum absolute row sum
    Infinity,
    /// Square root of the sum of squared magnitudes
    Frobenius,
}

/// Row-major or column-major total order over coordinates
///
/// Implementations only define the projection between (row, column) and
/// (primary, secondary); comparison, extents, and the line-boundary probe
/// follow from it.
pub trait StorageOrder: Copy + Clone + Default + core::fmt::Debug + 'static {
    /// True when the primary axis is the row axis
    const PRIMARY_IS_ROW: bool;

    /// Name used in diagnostics
    const NAME: &'static str;

    /// Project a coordinate onto (primary, secondary)
    fn to_storage(coord: (usize, usize)) -> (usize, usize);

    /// Inverse of [`to_storage`](Self::to_storage)
    fn from_storage(primary: usize, secondary: usize) -> (usize, usize);

    /// Strict total order over coordinate pairs
    fn cmp(a: (usize, usize), b: (usize, usize)) -> Ordering {
        Self::to_storage(a).cmp(&Self::to_storage(b))
    }

    /// Extent of the primary axis
    fn primary_extent(dims: &Dimensions) -> usize {
        if Self::PRIMARY_IS_ROW {
            dims.rows()
        } else {
            dims.columns()
        }
    }

    /// Extent of the secondary axis
    fn secondary_extent(dims: &Dimensions) -> usize {
        if Self::PRIMARY_IS_ROW {
            dims.columns()
        } else {
            dims.rows()
        }
    }

    /// Smallest coordinate of the primary line after `primary`
    ///
    /// Streaming norms compare against this probe to detect that the
    /// current entry left the running line.
    fn next_line(primary: usize) -> (usize, usize) {
        Self::from_storage(primary + 1, 0)
    }

    /// Build dimensions from primary/secondary extents
    fn dims_from_extents(primary: usize, secondary: usize) -> Dimensions {
        if Self::PRIMARY_IS_ROW {
            Dimensions::new(primary, secondary)
        } else {
            Dimensions::new(secondary, primary)
        }
    }

    /// True when the reduction axis of `kind` coincides with the primary
    /// axis, so the norm can stream line by line instead of scattering
    /// into an accumulator
    fn aligned(kind: NormKind) -> bool {
        match kind {
            NormKind::Infinity => Self::PRIMARY_IS_ROW,
            NormKind::One => !Self::PRIMARY_IS_ROW,
            NormKind::Frobenius => false,
        }
    }
}

/// Row-major convention: primary key = row, secondary key = column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowMajor;

impl StorageOrder for RowMajor {
    const PRIMARY_IS_ROW: bool = true;
    const NAME: &'static str = "row-major";

    fn to_storage(coord: (usize, usize)) -> (usize, usize) {
        coord
    }

    fn from_storage(primary: usize, secondary: usize) -> (usize, usize) {
        (primary, secondary)
    }
}

/// Column-major convention: primary key = column, secondary key = row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColMajor;

impl StorageOrder for ColMajor {
    const PRIMARY_IS_ROW: bool = false;
    const NAME: &'static str = "column-major";

    fn to_storage(coord: (usize, usize)) -> (usize, usize) {
        (coord.1, coord.0)
    }

    fn from_storage(primary: usize, secondary: usize) -> (usize, usize) {
        (secondary, primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_order() {
        assert_eq!(RowMajor::cmp((0, 5), (1, 0)), Ordering::Less);
        assert_eq!(RowMajor::cmp((1, 2), (1, 2)), Ordering::Equal);
        assert_eq!(RowMajor::cmp((2, 0), (1, 9)), Ordering::Greater);
    }

    #[test]
    fn test_col_major_order() {
        assert_eq!(ColMajor::cmp((5, 0), (0, 1)), Ordering::Less);
        assert_eq!(ColMajor::cmp((0, 2), (9, 1)), Ordering::Greater);
    }

    #[test]
    fn test_storage_projection_roundtrip() {
        let coord = (3, 7);
        let (p, s) = ColMajor::to_storage(coord);
        assert_eq!((p, s), (7, 3));
        assert_eq!(ColMajor::from_storage(p, s), coord);
    }

    #[test]
    fn test_next_line() {
        assert_eq!(RowMajor::next_line(2), (3, 0));
        assert_eq!(ColMajor::next_line(2), (0, 3));
    }

    #[test]
    fn test_extents() {
        let dims = Dimensions::new(3, 8);
        assert_eq!(RowMajor::primary_extent(&dims), 3);
        assert_eq!(RowMajor::secondary_extent(&dims), 8);
        assert_eq!(ColMajor::primary_extent(&dims), 8);
        assert_eq!(ColMajor::secondary_extent(&dims), 3);
    }

    #[test]
    fn test_norm_alignment() {
        assert!(RowMajor::aligned(NormKind::Infinity));
        assert!(!RowMajor::aligned(NormKind::One));
        assert!(ColMajor::aligned(NormKind::One));
        assert!(!ColMajor::aligned(NormKind::Infinity));
        assert!(!RowMajor::aligned(NormKind::Frobenius));
    }
}
