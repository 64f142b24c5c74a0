use rand::Rng;

use crate::error::ComputationFailure;

/// Sentinel held by every cell until the matrix is randomized.
pub const INF: i32 = 1_000_000_000;

/// Inclusive upper bound of the random cell values.
pub const MAX_WEIGHT: i32 = 100_000;

/// Square matrix of `i32` stored row by row, element (i, j) at `n*i + j`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    n: usize,
    cells: Vec<i32>,
}

impl Matrix {
    /// Allocate an `n`x`n` matrix with every cell set to `value`.
    ///
    /// Negative dimensions are rejected up front. Storage is reserved fallibly, so a
    /// dimension too large to allocate is an error instead of an abort.
    pub fn filled(n: i32, value: i32) -> Result<Matrix, ComputationFailure> {
        let dim = usize::try_from(n).map_err(|_| ComputationFailure::NegativeDimension { n })?;
        // An overflowing cell count is turned into a capacity overflow by try_reserve
        let len = dim.checked_mul(dim).unwrap_or(usize::MAX);
        let mut cells: Vec<i32> = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|source| ComputationFailure::Allocation { n, source })?;
        cells.resize(len, value);
        Ok(Matrix { n: dim, cells })
    }

    /// Overwrite every cell, row by row, with a value drawn uniformly from `[0, MAX_WEIGHT]`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_range(0..=MAX_WEIGHT);
        }
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> i32 {
        self.cells[self.n * i + j]
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.cells
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.cells
    }
}
