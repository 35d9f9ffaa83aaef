#![no_std]

//! Sparmat Core - Sparse Matrix Storage Definitions
//!
//! This crate provides the core definitions shared by the sparse matrix
//! stores: dimensions, storage-order comparators, the numeric element
//! trait, error types, and the storage contract traits.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod dims;
pub mod error;
pub mod order;
pub mod scalar;
pub mod traits;

pub use dims::*;
pub use error::*;
pub use order::*;
pub use scalar::*;
pub use traits::*;

// Re-exported so downstream crates can name the element types and the
// additive identity without depending on the numeric crates directly.
pub use num_complex::Complex;
pub use num_traits::Zero;
