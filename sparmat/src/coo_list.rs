//! List-backed dynamic triplet store
//!
//! Triplets live in one vector kept in ascending storage order. Point
//! lookup, insertion, and removal are linear scans; the streaming export
//! is a plain consuming iterator over the already-sorted entries.

use core::cmp::Ordering;
use core::marker::PhantomData;

use sparmat_core::{
    Dimensions, DynamicStorage, NormKind, Result, Scalar, SparseAccess, StorageOrder, Triplet,
    Zero,
};

use crate::norm;
use crate::validate;

/// Sorted-list dynamic store
#[derive(Debug, Clone)]
pub struct CooList<T, O> {
    entries: Vec<((usize, usize), T)>,
    _order: PhantomData<O>,
}

impl<T: Scalar, O: StorageOrder> CooList<T, O> {
    fn from_entries(entries: Vec<((usize, usize), T)>) -> Self {
        Self {
            entries,
            _order: PhantomData,
        }
    }
}

impl<T: Scalar, O: StorageOrder> SparseAccess<T> for CooList<T, O> {
    fn nnz(&self) -> usize {
        self.entries.len()
    }

    fn get(&self, row: usize, col: usize) -> T {
        for &(coord, value) in &self.entries {
            match O::cmp(coord, (row, col)) {
                Ordering::Equal => return value,
                Ordering::Greater => break,
                Ordering::Less => {}
            }
        }
        T::zero()
    }

    fn norm(&self, kind: NormKind, dims: &Dimensions) -> f64 {
        norm::sorted_norm::<O, _>(
            self.entries.iter().map(|&(coord, v)| (coord, v.magnitude())),
            kind,
            dims,
        )
    }
}

fn to_triplet<T>(entry: ((usize, usize), T)) -> Triplet<T> {
    Triplet::new(entry.0 .0, entry.0 .1, entry.1)
}

impl<T: Scalar, O: StorageOrder> DynamicStorage<T, O> for CooList<T, O> {
    type Drain = core::iter::Map<
        std::vec::IntoIter<((usize, usize), T)>,
        fn(((usize, usize), T)) -> Triplet<T>,
    >;

    fn from_triplets(
        declared: Option<Dimensions>,
        coords: &[(usize, usize)],
        values: &[T],
    ) -> Result<(Self, Dimensions)> {
        let (entries, dims) = validate::sorted_triplets::<T, O>(declared, coords, values)?;
        Ok((Self::from_entries(entries), dims))
    }

    fn from_map(
        declared: Option<Dimensions>,
        entries: &std::collections::BTreeMap<(usize, usize), T>,
    ) -> Result<(Self, Dimensions)> {
        let coords: Vec<(usize, usize)> = entries.keys().copied().collect();
        let values: Vec<T> = entries.values().copied().collect();
        Self::from_triplets(declared, &coords, &values)
    }

    fn from_sorted<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Triplet<T>>,
    {
        Self::from_entries(
            entries
                .into_iter()
                .map(|t| ((t.row, t.col), t.value))
                .collect(),
        )
    }

    fn entry(&mut self, row: usize, col: usize) -> &mut T {
        let target = (row, col);
        let pos = self
            .entries
            .iter()
            .position(|&(coord, _)| O::cmp(coord, target) != Ordering::Less)
            .unwrap_or(self.entries.len());

        if pos == self.entries.len() || self.entries[pos].0 != target {
            self.entries.insert(pos, (target, T::zero()));
        }
        &mut self.entries[pos].1
    }

    fn remove(&mut self, row: usize, col: usize) -> bool {
        match self
            .entries
            .iter()
            .position(|&(coord, _)| coord == (row, col))
        {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    fn min_extents(&self) -> Dimensions {
        Dimensions::infer(self.entries.iter().map(|&(coord, _)| coord))
    }

    fn into_triplets(self) -> Self::Drain {
        self.entries.into_iter().map(to_triplet as fn(_) -> _)
    }

    fn multiply(&self, dims: &Dimensions, rhs: &[T]) -> Vec<T> {
        let mut result = vec![T::zero(); dims.rows()];
        for &((row, col), value) in &self.entries {
            result[row] += value * rhs[col];
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparmat_core::{ColMajor, RowMajor};

    fn fixture() -> (CooList<f64, RowMajor>, Dimensions) {
        let coords = [(0, 0), (2, 2), (0, 3), (1, 1), (1, 3)];
        let values = [8.0, 4.0, -2.0, -3.0, 4.0];
        CooList::from_triplets(None, &coords, &values).unwrap()
    }

    #[test]
    fn test_build_sorts_and_infers() {
        let (store, dims) = fixture();
        assert_eq!(store.nnz(), 5);
        assert_eq!((dims.rows(), dims.columns()), (3, 4));

        let order: Vec<_> = store.into_triplets().map(|t| (t.row, t.col)).collect();
        assert_eq!(order, vec![(0, 0), (0, 3), (1, 1), (1, 3), (2, 2)]);
    }

    #[test]
    fn test_get() {
        let (store, _) = fixture();
        assert_eq!(store.get(0, 3), -2.0);
        assert_eq!(store.get(1, 1), -3.0);
        assert_eq!(store.get(2, 0), 0.0);
    }

    #[test]
    fn test_entry_inserts_in_order() {
        let (mut store, _) = fixture();
        *store.entry(1, 2) = 9.0;
        assert_eq!(store.nnz(), 6);
        assert_eq!(store.get(1, 2), 9.0);

        // existing coordinate is not duplicated
        *store.entry(1, 2) = 7.0;
        assert_eq!(store.nnz(), 6);
        assert_eq!(store.get(1, 2), 7.0);

        let order: Vec<_> = store.into_triplets().map(|t| (t.row, t.col)).collect();
        assert_eq!(order, vec![(0, 0), (0, 3), (1, 1), (1, 2), (1, 3), (2, 2)]);
    }

    #[test]
    fn test_entry_defaults_to_zero() {
        let (mut store, _) = fixture();
        assert_eq!(*store.entry(2, 3), 0.0);
        assert_eq!(store.nnz(), 6);
    }

    #[test]
    fn test_remove() {
        let (mut store, _) = fixture();
        assert!(store.remove(1, 1));
        assert_eq!(store.nnz(), 4);
        assert_eq!(store.get(1, 1), 0.0);
        assert!(!store.remove(1, 1));
    }

    #[test]
    fn test_norms() {
        let (store, dims) = fixture();
        assert_eq!(store.norm(NormKind::Infinity, &dims), 10.0);
        assert_eq!(store.norm(NormKind::One, &dims), 8.0);
        assert!((store.norm(NormKind::Frobenius, &dims) - 109.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_multiply() {
        let coords = [(0, 0), (0, 1), (1, 0)];
        let values = [1.0, 2.0, 3.0];
        let (store, dims) =
            CooList::<f64, RowMajor>::from_triplets(None, &coords, &values).unwrap();
        assert_eq!(store.multiply(&dims, &[1.0, 2.0]), vec![5.0, 3.0]);
    }

    #[test]
    fn test_col_major_export_order() {
        let coords = [(0, 1), (1, 0), (0, 0)];
        let values = [2, 3, 1];
        let (store, _) = CooList::<i32, ColMajor>::from_triplets(None, &coords, &values).unwrap();
        let order: Vec<_> = store.into_triplets().map(|t| (t.row, t.col)).collect();
        assert_eq!(order, vec![(0, 0), (1, 0), (0, 1)]);
    }
}
