//! Shared norm kernel for the ordered dynamic stores
//!
//! Both dynamic back-ends iterate their entries in ascending storage
//! order, so they share one kernel. When the reduction axis of the norm
//! coincides with the primary axis the entries are streamed once,
//! flushing the running sum at each primary-line boundary; otherwise the
//! magnitudes are scattered into an accumulator sized to the reduction
//! extent. Frobenius is order-independent.

use core::cmp::Ordering;

use sparmat_core::{Dimensions, NormKind, StorageOrder};

pub(crate) fn sorted_norm<O, I>(entries: I, kind: NormKind, dims: &Dimensions) -> f64
where
    O: StorageOrder,
    I: Iterator<Item = ((usize, usize), f64)>,
{
    match kind {
        NormKind::Frobenius => entries.map(|(_, m)| m * m).sum::<f64>().sqrt(),
        _ if O::aligned(kind) => {
            let mut best = 0.0f64;
            let mut sum = 0.0f64;
            let mut line = 0usize;
            for (coord, magnitude) in entries {
                // crossing one or more line boundaries flushes the sum
                while O::cmp(coord, O::next_line(line)) != Ordering::Less {
                    best = best.max(sum);
                    sum = 0.0;
                    line += 1;
                }
                sum += magnitude;
            }
            best.max(sum)
        }
        _ => {
            let mut acc = vec![0.0f64; O::secondary_extent(dims)];
            for (coord, magnitude) in entries {
                let (_, secondary) = O::to_storage(coord);
                acc[secondary] += magnitude;
            }
            acc.into_iter().fold(0.0, f64::max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparmat_core::{ColMajor, RowMajor};

    // |8  0  0 -2|
    // |0 -3  0  4|
    // |0  0  4  0|
    fn row_major_entries() -> Vec<((usize, usize), f64)> {
        vec![
            ((0, 0), 8.0),
            ((0, 3), 2.0),
            ((1, 1), 3.0),
            ((1, 3), 4.0),
            ((2, 2), 4.0),
        ]
    }

    #[test]
    fn test_aligned_streaming() {
        let dims = Dimensions::new(3, 4);
        let norm = sorted_norm::<RowMajor, _>(
            row_major_entries().into_iter(),
            NormKind::Infinity,
            &dims,
        );
        assert_eq!(norm, 10.0);
    }

    #[test]
    fn test_mismatched_scatter() {
        let dims = Dimensions::new(3, 4);
        let norm =
            sorted_norm::<RowMajor, _>(row_major_entries().into_iter(), NormKind::One, &dims);
        assert_eq!(norm, 8.0);
    }

    #[test]
    fn test_frobenius() {
        let dims = Dimensions::new(3, 4);
        let norm = sorted_norm::<RowMajor, _>(
            row_major_entries().into_iter(),
            NormKind::Frobenius,
            &dims,
        );
        assert!((norm - 109.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_streaming_skips_empty_lines() {
        // column-major, one entry in column 0 and one in column 3
        let entries = vec![((0, 0), 2.0), ((1, 3), 5.0)];
        let dims = Dimensions::new(2, 4);
        let norm = sorted_norm::<ColMajor, _>(entries.into_iter(), NormKind::One, &dims);
        assert_eq!(norm, 5.0);
    }

    #[test]
    fn test_empty_stream() {
        let dims = Dimensions::new(0, 0);
        let norm =
            sorted_norm::<RowMajor, _>(core::iter::empty(), NormKind::Infinity, &dims);
        assert_eq!(norm, 0.0);
    }
}
