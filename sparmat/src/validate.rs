//! Construction-time validation shared by the dynamic stores

use sparmat_core::{Dimensions, Result, Scalar, SparseError, StorageOrder};

/// Sort parallel coordinate/value input into ascending storage order and
/// validate it: lengths must match, no coordinate may repeat, and every
/// coordinate must lie inside the declared dimensions. Without declared
/// dimensions they are inferred as max index + 1 per axis.
pub(crate) fn sorted_triplets<T, O>(
    declared: Option<Dimensions>,
    coords: &[(usize, usize)],
    values: &[T],
) -> Result<(Vec<((usize, usize), T)>, Dimensions)>
where
    T: Scalar,
    O: StorageOrder,
{
    if coords.len() != values.len() {
        return Err(SparseError::SizeMismatch);
    }

    let mut entries: Vec<((usize, usize), T)> =
        coords.iter().copied().zip(values.iter().copied()).collect();
    entries.sort_unstable_by(|a, b| O::cmp(a.0, b.0));

    for pair in entries.windows(2) {
        if pair[0].0 == pair[1].0 {
            return Err(SparseError::DuplicateIndex);
        }
    }

    let dims = match declared {
        Some(dims) => {
            for &((row, col), _) in &entries {
                if !dims.contains(row, col) {
                    return Err(SparseError::OutOfBounds);
                }
            }
            dims
        }
        None => Dimensions::infer(entries.iter().map(|&(coord, _)| coord)),
    };

    Ok((entries, dims))
}
