//! Map-backed dynamic triplet store
//!
//! Same external contract as the list store, backed by a `BTreeMap` whose
//! key delegates its ordering to the storage order. Iteration order of the
//! map therefore equals the export order, and point operations are
//! logarithmic instead of linear.

use core::marker::PhantomData;
use std::collections::BTreeMap;

use sparmat_core::{
    Dimensions, DynamicStorage, NormKind, Result, Scalar, SparseAccess, StorageOrder, Triplet,
    Zero,
};

use crate::norm;
use crate::validate;

/// Coordinate key ordered by the storage-order convention
#[derive(Debug, Clone, Copy)]
pub struct OrderedCoord<O> {
    coord: (usize, usize),
    _order: PhantomData<O>,
}

impl<O> OrderedCoord<O> {
    fn new(row: usize, col: usize) -> Self {
        Self {
            coord: (row, col),
            _order: PhantomData,
        }
    }
}

impl<O> PartialEq for OrderedCoord<O> {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl<O> Eq for OrderedCoord<O> {}

impl<O: StorageOrder> PartialOrd for OrderedCoord<O> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<O: StorageOrder> Ord for OrderedCoord<O> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        O::cmp(self.coord, other.coord)
    }
}

/// Ordered-map dynamic store
#[derive(Debug, Clone)]
pub struct CooMap<T, O> {
    entries: BTreeMap<OrderedCoord<O>, T>,
}

impl<T: Scalar, O: StorageOrder> SparseAccess<T> for CooMap<T, O> {
    fn nnz(&self) -> usize {
        self.entries.len()
    }

    fn get(&self, row: usize, col: usize) -> T {
        self.entries
            .get(&OrderedCoord::new(row, col))
            .copied()
            .unwrap_or_else(T::zero)
    }

    fn norm(&self, kind: NormKind, dims: &Dimensions) -> f64 {
        norm::sorted_norm::<O, _>(
            self.entries
                .iter()
                .map(|(key, v)| (key.coord, v.magnitude())),
            kind,
            dims,
        )
    }
}

fn to_triplet<T, O>(entry: (OrderedCoord<O>, T)) -> Triplet<T> {
    Triplet::new(entry.0.coord.0, entry.0.coord.1, entry.1)
}

impl<T: Scalar, O: StorageOrder> DynamicStorage<T, O> for CooMap<T, O> {
    type Drain = core::iter::Map<
        std::collections::btree_map::IntoIter<OrderedCoord<O>, T>,
        fn((OrderedCoord<O>, T)) -> Triplet<T>,
    >;

    fn from_triplets(
        declared: Option<Dimensions>,
        coords: &[(usize, usize)],
        values: &[T],
    ) -> Result<(Self, Dimensions)> {
        let (entries, dims) = validate::sorted_triplets::<T, O>(declared, coords, values)?;
        let entries = entries
            .into_iter()
            .map(|((row, col), value)| (OrderedCoord::new(row, col), value))
            .collect();
        Ok((Self { entries }, dims))
    }

    fn from_map(
        declared: Option<Dimensions>,
        entries: &BTreeMap<(usize, usize), T>,
    ) -> Result<(Self, Dimensions)> {
        let coords: Vec<(usize, usize)> = entries.keys().copied().collect();
        let values: Vec<T> = entries.values().copied().collect();
        Self::from_triplets(declared, &coords, &values)
    }

    fn from_sorted<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Triplet<T>>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|t| (OrderedCoord::new(t.row, t.col), t.value))
                .collect(),
        }
    }

    fn entry(&mut self, row: usize, col: usize) -> &mut T {
        self.entries
            .entry(OrderedCoord::new(row, col))
            .or_insert_with(T::zero)
    }

    fn remove(&mut self, row: usize, col: usize) -> bool {
        self.entries.remove(&OrderedCoord::new(row, col)).is_some()
    }

    fn min_extents(&self) -> Dimensions {
        Dimensions::infer(self.entries.keys().map(|key| key.coord))
    }

    fn into_triplets(self) -> Self::Drain {
        self.entries.into_iter().map(to_triplet as fn(_) -> _)
    }

    fn multiply(&self, dims: &Dimensions, rhs: &[T]) -> Vec<T> {
        let mut result = vec![T::zero(); dims.rows()];
        for (key, &value) in &self.entries {
            let (row, col) = key.coord;
            result[row] += value * rhs[col];
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparmat_core::{ColMajor, RowMajor};

    fn fixture() -> (CooMap<f64, ColMajor>, Dimensions) {
        let coords = [(0, 0), (2, 2), (0, 3), (1, 1), (1, 3)];
        let values = [8.0, 4.0, -2.0, -3.0, 4.0];
        CooMap::from_triplets(None, &coords, &values).unwrap()
    }

    #[test]
    fn test_iteration_follows_storage_order() {
        let (store, _) = fixture();
        let order: Vec<_> = store.into_triplets().map(|t| (t.row, t.col)).collect();
        // column-major: sorted by column first
        assert_eq!(order, vec![(0, 0), (1, 1), (2, 2), (0, 3), (1, 3)]);
    }

    #[test]
    fn test_get_entry_remove() {
        let (mut store, _) = fixture();
        assert_eq!(store.get(1, 3), 4.0);
        assert_eq!(store.get(2, 0), 0.0);

        *store.entry(2, 0) = 6.0;
        assert_eq!(store.get(2, 0), 6.0);
        assert_eq!(store.nnz(), 6);

        assert!(store.remove(2, 0));
        assert!(!store.remove(2, 0));
        assert_eq!(store.nnz(), 5);
    }

    #[test]
    fn test_norms_match_list_semantics() {
        let (store, dims) = fixture();
        // column-major: One norm streams, Infinity norm scatters
        assert_eq!(store.norm(NormKind::Infinity, &dims), 10.0);
        assert_eq!(store.norm(NormKind::One, &dims), 8.0);
        assert!((store.norm(NormKind::Frobenius, &dims) - 109.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_from_map_input() {
        let mut input = BTreeMap::new();
        input.insert((0, 0), 10);
        input.insert((13, 14), -6);

        let (store, dims) = CooMap::<i32, RowMajor>::from_map(None, &input).unwrap();
        assert_eq!((dims.rows(), dims.columns()), (14, 15));
        assert_eq!(store.get(13, 14), -6);
    }

    #[test]
    fn test_multiply() {
        let coords = [(0, 0), (0, 1), (1, 0)];
        let values = [1.0, 2.0, 3.0];
        let (store, dims) =
            CooMap::<f64, ColMajor>::from_triplets(None, &coords, &values).unwrap();
        assert_eq!(store.multiply(&dims, &[1.0, 2.0]), vec![5.0, 3.0]);
    }
}
