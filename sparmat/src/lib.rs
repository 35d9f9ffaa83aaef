//! Sparmat - Dual-Representation Sparse Matrix Storage
//!
//! This library stores a sparse matrix under two interchangeable
//! representations and converts losslessly between them on demand:
//!
//! - **Dynamic**: an editable triplet store, either list-backed
//!   ([`CooList`]) or map-backed ([`CooMap`]), kept in ascending storage
//!   order. Cheap single-element mutation.
//! - **Compressed**: the pointer-index-value store [`Csx`] (classic
//!   CSR/CSC layout, oriented by the storage order). Cheap bulk reads and
//!   matrix-vector products, costlier single-element mutation.
//!
//! The [`Matrix`] facade owns the dimensions and whichever store is
//! currently live, and dispatches element access, removal, norms, and
//! multiplication uniformly across both modes.
//!
//! ## Quick Start
//!
//! ```rust
//! use sparmat::{ListMatrix, NormKind};
//!
//! let coords = [(0, 0), (2, 2), (0, 3), (1, 1), (1, 3)];
//! let values = [8.0, 4.0, -2.0, -3.0, 4.0];
//!
//! // Dimensions inferred from the data: 3 x 4
//! let mut m: ListMatrix<f64> = ListMatrix::from_triplets(&coords, &values)?;
//! assert_eq!(m.dimensions(), (3, 4));
//! assert_eq!(m.norm(NormKind::Infinity), 10.0);
//!
//! // Round trip through the compressed representation
//! m.compress()?;
//! assert_eq!(m.get(0, 3)?, -2.0);
//! m.uncompress()?;
//! assert_eq!(m.get(0, 3)?, -2.0);
//! # Ok::<(), sparmat::SparseError>(())
//! ```

// Re-export core definitions
pub use sparmat_core::{
    // Dimensions and ordering
    ColMajor, Dimensions, NormKind, RowMajor, StorageOrder,
    // Element types
    Complex, Scalar, Zero,
    // Storage contracts
    DynamicStorage, SparseAccess, Triplet,
    // Error handling
    Result, SparseError,
};

pub mod convert;
pub mod coo_list;
pub mod coo_map;
pub mod csx;
pub mod market;
pub mod matrix;

mod norm;
mod validate;

pub use coo_list::CooList;
pub use coo_map::CooMap;
pub use csx::{Csx, CsxBuilder};
pub use market::{parse_market, read_market_file, MarketData};
pub use matrix::Matrix;

/// Matrix over the list-backed dynamic store
pub type ListMatrix<T, O = RowMajor> = Matrix<T, O, CooList<T, O>>;

/// Matrix over the map-backed dynamic store
pub type MapMatrix<T, O = RowMajor> = Matrix<T, O, CooMap<T, O>>;
