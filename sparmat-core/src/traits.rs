//! Storage contract traits
//!
//! The two dynamic stores are interchangeable behind [`DynamicStorage`];
//! the facade dispatches on whichever back-end it was built with. These are
//! pure interfaces with no concrete implementations.

#[cfg(feature = "alloc")]
use alloc::collections::BTreeMap;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::dims::Dimensions;
#[cfg(feature = "alloc")]
use crate::error::Result;
use crate::order::NormKind;
#[cfg(feature = "alloc")]
use crate::order::StorageOrder;
use crate::scalar::Scalar;

/// One stored non-zero entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triplet<T> {
    /// Row coordinate (0-based)
    pub row: usize,
    /// Column coordinate (0-based)
    pub col: usize,
    /// Stored value
    pub value: T,
}

impl<T> Triplet<T> {
    /// Create a triplet
    pub const fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }
}

/// Format-agnostic element access
///
/// The minimal interface every store provides regardless of representation.
pub trait SparseAccess<T: Scalar> {
    /// Number of stored non-zero entries
    fn nnz(&self) -> usize;

    /// Stored value at the coordinate, or the additive identity when absent
    ///
    /// Bounds are checked by the caller against the owning dimensions.
    fn get(&self, row: usize, col: usize) -> T;

    /// Norm of the stored entries
    fn norm(&self, kind: NormKind, dims: &Dimensions) -> f64;
}

/// Contract shared by the editable triplet stores (requires alloc)
///
/// Both dynamic back-ends keep their triplets totally ordered by the
/// storage order `O`; the export iterator yields them in that order, and
/// the sorted-stream constructor trusts its input to already be ordered
/// (the conversion protocol guarantees it).
#[cfg(feature = "alloc")]
pub trait DynamicStorage<T: Scalar, O: StorageOrder>: SparseAccess<T> + Sized {
    /// Consuming export iterator, ascending storage order
    type Drain: Iterator<Item = Triplet<T>>;

    /// Build from parallel coordinate/value slices
    ///
    /// Sorts the input by the storage order. When `declared` is absent the
    /// dimensions are inferred as max index + 1 per axis; otherwise every
    /// coordinate is validated against them. Returns the store together
    /// with the effective dimensions.
    fn from_triplets(
        declared: Option<Dimensions>,
        coords: &[(usize, usize)],
        values: &[T],
    ) -> Result<(Self, Dimensions)>;

    /// Build from an associative coordinate-to-value input
    fn from_map(
        declared: Option<Dimensions>,
        entries: &BTreeMap<(usize, usize), T>,
    ) -> Result<(Self, Dimensions)>;

    /// Build from a stream already in ascending storage order
    fn from_sorted<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Triplet<T>>;

    /// Mutable reference to the entry, inserting an explicit zero when the
    /// coordinate is absent
    fn entry(&mut self, row: usize, col: usize) -> &mut T;

    /// Delete the entry if present
    fn remove(&mut self, row: usize, col: usize) -> bool;

    /// Smallest dimensions covering every stored entry
    fn min_extents(&self) -> Dimensions;

    /// Consume the store, yielding its triplets in ascending storage order
    fn into_triplets(self) -> Self::Drain;

    /// Matrix-vector product over the stored entries
    ///
    /// The operand length must equal the column count; the caller checks.
    fn multiply(&self, dims: &Dimensions, rhs: &[T]) -> Vec<T>;
}
