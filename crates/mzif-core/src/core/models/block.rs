use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A square numeric block stored in compressed sparse row (CSR) form.
///
/// Only exact nonzero values are stored. Zeros are implicit, so a block that
/// is mostly empty costs little more than its row offset table, while every
/// nonzero value is kept bit-for-bit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseBlock {
    side: usize,
    /// `row_offsets[r]..row_offsets[r + 1]` indexes the entries of row `r`.
    row_offsets: Vec<usize>,
    columns: Vec<usize>,
    values: Vec<f64>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Block of side {side} needs {expected} values, got {actual}")]
pub struct BlockShapeError {
    pub side: usize,
    pub expected: usize,
    pub actual: usize,
}

impl SparseBlock {
    /// Builds a block from `side * side` values laid out row by row.
    pub fn from_row_major(side: usize, data: &[f64]) -> Result<Self, BlockShapeError> {
        let expected = side * side;
        if data.len() != expected {
            return Err(BlockShapeError {
                side,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::compress(side, data))
    }

    pub(crate) fn compress(side: usize, data: &[f64]) -> Self {
        debug_assert_eq!(data.len(), side * side);

        let mut row_offsets = Vec::with_capacity(side + 1);
        let mut columns = Vec::new();
        let mut values = Vec::new();

        row_offsets.push(0);
        for row in data.chunks(side.max(1)).take(side) {
            for (col, &value) in row.iter().enumerate() {
                if value != 0.0 {
                    columns.push(col);
                    values.push(value);
                }
            }
            row_offsets.push(values.len());
        }

        Self {
            side,
            row_offsets,
            columns,
            values,
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of explicitly stored (nonzero) values.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns the value at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.side || col >= self.side {
            return None;
        }
        let start = *self.row_offsets.get(row)?;
        let end = *self.row_offsets.get(row + 1)?;
        let cols = self.columns.get(start..end)?;
        match cols.binary_search(&col) {
            Ok(pos) => self.values.get(start + pos).copied(),
            Err(_) => Some(0.0),
        }
    }

    /// Iterates the stored `(row, col, value)` triples in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.row_offsets
            .windows(2)
            .enumerate()
            .flat_map(move |(row, bounds)| {
                let range = bounds[0]..bounds[1];
                let cols = self.columns.get(range.clone()).unwrap_or(&[]);
                let vals = self.values.get(range).unwrap_or(&[]);
                cols.iter().zip(vals).map(move |(&col, &value)| (row, col, value))
            })
    }

    pub fn to_dense(&self) -> DMatrix<f64> {
        let mut dense = DMatrix::zeros(self.side, self.side);
        for (row, col, value) in self.entries() {
            if row < self.side && col < self.side {
                dense[(row, col)] = value;
            }
        }
        dense
    }

    /// Checks the internal CSR invariants. Blocks built in-process always pass;
    /// this guards data read back from a container.
    pub fn is_well_formed(&self) -> bool {
        if self.row_offsets.len() != self.side + 1
            || self.row_offsets.first() != Some(&0)
            || self.row_offsets.last() != Some(&self.values.len())
            || self.columns.len() != self.values.len()
        {
            return false;
        }

        if !self.row_offsets.windows(2).all(|bounds| bounds[0] <= bounds[1]) {
            return false;
        }

        self.row_offsets.windows(2).all(|bounds| {
            let cols = &self.columns[bounds[0]..bounds[1]];
            cols.windows(2).all(|pair| pair[0] < pair[1]) && cols.iter().all(|&c| c < self.side)
        })
    }
}
