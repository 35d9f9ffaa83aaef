//! Matrix Market exchange format reader
//!
//! Reads the coordinate flavor of the NIST Matrix Market format: a
//! `%%MatrixMarket` banner, any number of `%` comment lines, one size line
//! `rows columns nnz`, then one `row col value` line per entry with
//! 1-based coordinates. Anything that does not fit that shape maps to
//! [`SparseError::MalformedFile`]; an entry outside the declared extents
//! maps to [`SparseError::OutOfBounds`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use sparmat_core::{Dimensions, Result, Scalar, SparseError, Triplet};

/// Parsed contents of a Matrix Market file
#[derive(Debug, Clone)]
pub struct MarketData<T> {
    pub dimensions: Dimensions,
    pub entries: Vec<Triplet<T>>,
}

fn parse_usize(token: &str) -> Result<usize> {
    token.parse().map_err(|_| SparseError::MalformedFile)
}

fn parse_size_line(line: &str) -> Result<(Dimensions, usize)> {
    let mut tokens = line.split_whitespace();
    let rows = parse_usize(tokens.next().ok_or(SparseError::MalformedFile)?)?;
    let columns = parse_usize(tokens.next().ok_or(SparseError::MalformedFile)?)?;
    let nnz = parse_usize(tokens.next().ok_or(SparseError::MalformedFile)?)?;
    if tokens.next().is_some() {
        return Err(SparseError::MalformedFile);
    }
    Ok((Dimensions::new(rows, columns), nnz))
}

fn parse_entry_line<T: Scalar>(line: &str, dims: &Dimensions) -> Result<Triplet<T>> {
    let mut tokens = line.split_whitespace();
    let row = parse_usize(tokens.next().ok_or(SparseError::MalformedFile)?)?;
    let col = parse_usize(tokens.next().ok_or(SparseError::MalformedFile)?)?;
    let value: f64 = tokens
        .next()
        .ok_or(SparseError::MalformedFile)?
        .parse()
        .map_err(|_| SparseError::MalformedFile)?;
    if tokens.next().is_some() {
        return Err(SparseError::MalformedFile);
    }

    // coordinates are 1-based in the file
    if row == 0 || col == 0 {
        return Err(SparseError::MalformedFile);
    }
    let (row, col) = (row - 1, col - 1);
    if !dims.contains(row, col) {
        return Err(SparseError::OutOfBounds);
    }
    Ok(Triplet::new(row, col, T::from_f64(value)))
}

/// Parse Matrix Market coordinate data from any buffered reader
pub fn parse_market<T: Scalar, R: BufRead>(reader: R) -> Result<MarketData<T>> {
    let mut lines = reader.lines();

    let banner = lines
        .next()
        .ok_or(SparseError::MalformedFile)?
        .map_err(|_| SparseError::MalformedFile)?;
    if !banner.starts_with("%%MatrixMarket") {
        return Err(SparseError::MalformedFile);
    }

    let mut dims = None;
    let mut nnz = 0;
    let mut entries = Vec::new();
    for line in lines {
        let line = line.map_err(|_| SparseError::MalformedFile)?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('%') {
            continue;
        }
        match dims {
            None => {
                let (parsed, count) = parse_size_line(line)?;
                entries.reserve(count);
                dims = Some(parsed);
                nnz = count;
            }
            Some(ref dims) => {
                if entries.len() == nnz {
                    return Err(SparseError::MalformedFile);
                }
                entries.push(parse_entry_line(line, dims)?);
            }
        }
    }

    let dimensions = dims.ok_or(SparseError::MalformedFile)?;
    if entries.len() != nnz {
        return Err(SparseError::MalformedFile);
    }
    Ok(MarketData {
        dimensions,
        entries,
    })
}

/// Read and parse a Matrix Market file from disk
pub fn read_market_file<T: Scalar, P: AsRef<Path>>(path: P) -> Result<MarketData<T>> {
    let file = File::open(path).map_err(|_| SparseError::MalformedFile)?;
    parse_market(BufReader::new(file))
}
