//! Compressed pointer-index-value store
//!
//! Classic compressed-sparse-row/column layout oriented by the storage
//! order: a monotone pointer array of length primary-extent + 1, an array
//! of secondary coordinates sorted inside each pointer-delimited slice,
//! and the parallel value array. The slice `[ptr[k], ptr[k+1])` of the
//! index/value arrays holds exactly the entries of primary line `k`.

use core::marker::PhantomData;

use sparmat_core::{
    Dimensions, NormKind, Result, Scalar, SparseAccess, SparseError, StorageOrder, Triplet, Zero,
};

/// Compressed store
#[derive(Debug, Clone)]
pub struct Csx<T, O> {
    pointers: Vec<usize>,
    indices: Vec<usize>,
    values: Vec<T>,
    _order: PhantomData<O>,
}

impl<T: Scalar, O: StorageOrder> Csx<T, O> {
    /// Build from compressed-format parts
    ///
    /// `indices` holds the secondary coordinate of each entry, `pointers`
    /// the cumulative per-line offsets, `values` the entries themselves.
    /// The pointer array must start at zero, never decrease, and end at
    /// the entry count; each slice must hold strictly increasing secondary
    /// coordinates. Without declared dimensions the primary extent is
    /// `pointers.len() - 1` and the secondary extent is max index + 1.
    pub fn from_parts(
        declared: Option<Dimensions>,
        indices: &[usize],
        pointers: &[usize],
        values: &[T],
    ) -> Result<(Self, Dimensions)> {
        if indices.len() != values.len() {
            return Err(SparseError::SizeMismatch);
        }
        if pointers.is_empty() || pointers[0] != 0 {
            return Err(SparseError::InvalidPointers);
        }
        for pair in pointers.windows(2) {
            if pair[1] < pair[0] {
                return Err(SparseError::InvalidPointers);
            }
        }
        if *pointers.last().unwrap() != values.len() {
            return Err(SparseError::InvalidPointers);
        }
        for line in 0..pointers.len() - 1 {
            let slice = &indices[pointers[line]..pointers[line + 1]];
            for pair in slice.windows(2) {
                if pair[1] <= pair[0] {
                    return Err(SparseError::DuplicateIndex);
                }
            }
        }

        let dims = match declared {
            Some(dims) => {
                if pointers.len() != O::primary_extent(&dims) + 1 {
                    return Err(SparseError::SizeMismatch);
                }
                let secondary_extent = O::secondary_extent(&dims);
                if indices.iter().any(|&s| s >= secondary_extent) {
                    return Err(SparseError::OutOfBounds);
                }
                dims
            }
            None => {
                let secondary_extent = indices.iter().max().map_or(0, |&s| s + 1);
                O::dims_from_extents(pointers.len() - 1, secondary_extent)
            }
        };

        Ok((
            Self {
                pointers: pointers.to_vec(),
                indices: indices.to_vec(),
                values: values.to_vec(),
                _order: PhantomData,
            },
            dims,
        ))
    }

    /// Borrow the raw (indices, pointers, values) arrays
    pub fn parts(&self) -> (&[usize], &[usize], &[T]) {
        (&self.indices, &self.pointers, &self.values)
    }

    /// Mutable reference to the entry, inserting an explicit zero when the
    /// coordinate is absent
    ///
    /// The coordinate must lie inside the dimensions the store was built
    /// with; the owning matrix checks bounds before calling. An insertion
    /// shifts the index/value arrays and increments every pointer after
    /// the target line, so it costs O(nnz).
    pub fn entry(&mut self, row: usize, col: usize) -> &mut T {
        let (primary, secondary) = O::to_storage((row, col));
        let start = self.pointers[primary];
        let end = self.pointers[primary + 1];

        let pos = match self.indices[start..end].binary_search(&secondary) {
            Ok(offset) => start + offset,
            Err(offset) => {
                let pos = start + offset;
                self.indices.insert(pos, secondary);
                self.values.insert(pos, T::zero());
                for ptr in &mut self.pointers[primary + 1..] {
                    *ptr += 1;
                }
                pos
            }
        };
        &mut self.values[pos]
    }

    /// Delete the entry if present, decrementing the trailing pointers
    pub fn remove(&mut self, row: usize, col: usize) -> bool {
        let (primary, secondary) = O::to_storage((row, col));
        if primary + 1 >= self.pointers.len() {
            return false;
        }
        let start = self.pointers[primary];
        let end = self.pointers[primary + 1];

        for pos in start..end {
            if self.indices[pos] == secondary {
                self.indices.remove(pos);
                self.values.remove(pos);
                for ptr in &mut self.pointers[primary + 1..] {
                    *ptr -= 1;
                }
                return true;
            }
        }
        false
    }

    /// Consume the store, yielding triplets in ascending storage order
    pub fn into_triplets(self) -> CsxIntoIter<T, O> {
        CsxIntoIter {
            pointers: self.pointers,
            entries: self
                .indices
                .into_iter()
                .zip(self.values.into_iter())
                .enumerate(),
            line: 0,
            _order: PhantomData,
        }
    }

    /// Matrix-vector product over the stored entries
    pub fn multiply(&self, dims: &Dimensions, rhs: &[T]) -> Vec<T> {
        let mut result = vec![T::zero(); dims.rows()];
        for line in 0..self.pointers.len() - 1 {
            for pos in self.pointers[line]..self.pointers[line + 1] {
                if O::PRIMARY_IS_ROW {
                    result[line] += self.values[pos] * rhs[self.indices[pos]];
                } else {
                    result[self.indices[pos]] += self.values[pos] * rhs[line];
                }
            }
        }
        result
    }
}

impl<T: Scalar, O: StorageOrder> SparseAccess<T> for Csx<T, O> {
    fn nnz(&self) -> usize {
        self.values.len()
    }

    fn get(&self, row: usize, col: usize) -> T {
        let (primary, secondary) = O::to_storage((row, col));
        if primary + 1 >= self.pointers.len() {
            return T::zero();
        }
        let slice = &self.indices[self.pointers[primary]..self.pointers[primary + 1]];
        match slice.binary_search(&secondary) {
            Ok(offset) => self.values[self.pointers[primary] + offset],
            Err(_) => T::zero(),
        }
    }

    fn norm(&self, kind: NormKind, dims: &Dimensions) -> f64 {
        match kind {
            NormKind::Frobenius => self
                .values
                .iter()
                .map(|v| v.magnitude() * v.magnitude())
                .sum::<f64>()
                .sqrt(),
            _ if O::aligned(kind) => {
                let mut best = 0.0f64;
                for window in self.pointers.windows(2) {
                    let sum: f64 = self.values[window[0]..window[1]]
                        .iter()
                        .map(|v| v.magnitude())
                        .sum();
                    best = best.max(sum);
                }
                best
            }
            _ => {
                let mut acc = vec![0.0f64; O::secondary_extent(dims)];
                for (pos, v) in self.values.iter().enumerate() {
                    acc[self.indices[pos]] += v.magnitude();
                }
                acc.into_iter().fold(0.0, f64::max)
            }
        }
    }
}

/// Receiver side of the compression handshake
///
/// Triplets arrive one at a time in ascending storage order; each `push`
/// records a per-line tally at `primary + 1`. Only `finish` turns the
/// tallies into cumulative offsets with an in-place prefix sum, which must
/// not run before every triplet has been received.
#[derive(Debug)]
pub struct CsxBuilder<T, O> {
    pointers: Vec<usize>,
    indices: Vec<usize>,
    values: Vec<T>,
    _order: PhantomData<O>,
}

impl<T: Scalar, O: StorageOrder> CsxBuilder<T, O> {
    /// Pre-size for a matrix with the given primary extent and entry count
    pub fn new(primary_extent: usize, nnz: usize) -> Self {
        Self {
            pointers: vec![0; primary_extent + 1],
            indices: Vec::with_capacity(nnz),
            values: Vec::with_capacity(nnz),
            _order: PhantomData,
        }
    }

    /// Receive the next triplet
    pub fn push(&mut self, triplet: Triplet<T>) {
        let (primary, secondary) = O::to_storage((triplet.row, triplet.col));
        self.pointers[primary + 1] += 1;
        self.indices.push(secondary);
        self.values.push(triplet.value);
    }

    /// Finalize the pointer array and produce the store
    pub fn finish(mut self) -> Csx<T, O> {
        for line in 1..self.pointers.len() {
            self.pointers[line] += self.pointers[line - 1];
        }
        Csx {
            pointers: self.pointers,
            indices: self.indices,
            values: self.values,
            _order: PhantomData,
        }
    }
}

/// Owning triplet iterator over a compressed store
///
/// Walks the index/value arrays once, advancing the primary-line cursor
/// whenever the running position reaches the next pointer boundary.
#[derive(Debug)]
pub struct CsxIntoIter<T, O> {
    pointers: Vec<usize>,
    entries: core::iter::Enumerate<core::iter::Zip<std::vec::IntoIter<usize>, std::vec::IntoIter<T>>>,
    line: usize,
    _order: PhantomData<O>,
}

impl<T: Scalar, O: StorageOrder> Iterator for CsxIntoIter<T, O> {
    type Item = Triplet<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (pos, (secondary, value)) = self.entries.next()?;
        while self.line + 1 < self.pointers.len() && self.pointers[self.line + 1] <= pos {
            self.line += 1;
        }
        let (row, col) = O::from_storage(self.line, secondary);
        Some(Triplet::new(row, col, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T: Scalar, O: StorageOrder> ExactSizeIterator for CsxIntoIter<T, O> {}
