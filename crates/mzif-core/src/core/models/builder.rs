use super::block::SparseBlock;
use thiserror::Error;

/// Every model carries this many square blocks.
pub const BLOCKS_PER_MODEL: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlockBuildError {
    #[error("Row has {found} values but rows of this model are {expected} wide")]
    WidthMismatch { expected: usize, found: usize },
    #[error("Row contains no values")]
    EmptyRow,
    #[error("Expected {expected} rows to build the blocks, got {actual}")]
    Incomplete { expected: usize, actual: usize },
    #[error("Expected exactly {expected} rows to build the blocks, got more")]
    TooManyRows { expected: usize },
}

/// Accumulates numeric rows until `3 × width` of them are available and then
/// cuts them into [`BLOCKS_PER_MODEL`] square blocks.
///
/// The width is fixed by the first row pushed. Completing the blocks resets the
/// builder, so the next row starts a fresh accumulation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockBuilder {
    width: Option<usize>,
    values: Vec<f64>,
    rows: usize,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> Option<usize> {
        self.width
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total rows needed to complete the blocks, once the width is known.
    pub fn rows_needed(&self) -> Option<usize> {
        self.width.map(|w| w * BLOCKS_PER_MODEL)
    }

    /// Appends one row. Once `3 × width` rows are held, returns the finished
    /// blocks (rows `[0, w)`, `[w, 2w)` and `[2w, 3w)` in that order) and clears
    /// the accumulator.
    pub fn push_row(
        &mut self,
        row: &[f64],
    ) -> Result<Option<[SparseBlock; BLOCKS_PER_MODEL]>, BlockBuildError> {
        if row.is_empty() {
            return Err(BlockBuildError::EmptyRow);
        }

        let width = *self.width.get_or_insert(row.len());
        if row.len() != width {
            return Err(BlockBuildError::WidthMismatch {
                expected: width,
                found: row.len(),
            });
        }

        if self.values.is_empty() {
            self.values.reserve(width * width * BLOCKS_PER_MODEL);
        }
        self.values.extend_from_slice(row);
        self.rows += 1;

        if self.rows < width * BLOCKS_PER_MODEL {
            return Ok(None);
        }

        let values = std::mem::take(self).values;
        let per_block = width * width;
        Ok(Some(std::array::from_fn(|i| {
            SparseBlock::compress(width, &values[i * per_block..(i + 1) * per_block])
        })))
    }
}

/// Builds the blocks of one model from exactly `3 × width` rows.
pub fn build_blocks(rows: &[Vec<f64>]) -> Result<[SparseBlock; BLOCKS_PER_MODEL], BlockBuildError> {
    let mut builder = BlockBuilder::new();
    for (i, row) in rows.iter().enumerate() {
        if let Some(blocks) = builder.push_row(row)? {
            if i + 1 != rows.len() {
                return Err(BlockBuildError::TooManyRows { expected: i + 1 });
            }
            return Ok(blocks);
        }
    }
    Err(BlockBuildError::Incomplete {
        expected: builder.rows_needed().unwrap_or(0),
        actual: builder.rows(),
    })
}
