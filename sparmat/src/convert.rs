//! Triplet-streaming conversion between the two representations
//!
//! Both directions drain the source store one triplet at a time in
//! ascending storage order and feed a fresh store of the other kind. The
//! source is consumed, so exactly one representation ever holds live data.
//! The cursors are explicit objects (the export iterator and the
//! [`CsxBuilder`]) scoped to one conversion call, which makes the
//! no-interleaving sequencing contract structural rather than implicit.

use sparmat_core::{Dimensions, DynamicStorage, Scalar, SparseAccess, StorageOrder};

use crate::csx::{Csx, CsxBuilder};

/// Drain a dynamic store into a compressed one
pub fn compress_store<T, O, D>(dims: &Dimensions, store: D) -> Csx<T, O>
where
    T: Scalar,
    O: StorageOrder,
    D: DynamicStorage<T, O>,
{
    let mut builder = CsxBuilder::new(O::primary_extent(dims), store.nnz());
    for triplet in store.into_triplets() {
        builder.push(triplet);
    }
    builder.finish()
}

/// Drain a compressed store into a fresh dynamic one
pub fn uncompress_store<T, O, D>(store: Csx<T, O>) -> D
where
    T: Scalar,
    O: StorageOrder,
    D: DynamicStorage<T, O>,
{
    D::from_sorted(store.into_triplets())
}
