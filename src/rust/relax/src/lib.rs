//! Random matrix fill followed by a fixed min-relaxation pass.
//!
//! The pass looks like the Floyd-Warshall shortcut step but only ever takes the
//! minimum of two existing cells, it never adds edge weights. It is a workload,
//! not a shortest path solver.

mod error;
mod matrix;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub use error::ComputationFailure;
pub use matrix::{Matrix, INF, MAX_WEIGHT};

/// Seed used by [`calculate`], the Mersenne Twister default.
pub const DEFAULT_SEED: u64 = 5489;

/// For every i, j, k in that nesting order, set (j, k) to min((j, i), (i, k)).
///
/// Reads see writes made earlier in the same pass.
#[inline]
pub fn step(cells: &mut [i32], n: usize) {
    debug_assert_eq!(cells.len(), n * n);
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                let x = cells[n*j + i];
                let y = cells[n*i + k];
                cells[n*j + k] = x.min(y);
            }
        }
    }
}

/// Build, randomize and relax an `n`x`n` matrix, returning it.
pub fn relax_seeded(n: i32, seed: u64) -> Result<Matrix, ComputationFailure> {
    let mut graph = Matrix::filled(n, INF)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    graph.randomize(&mut rng);
    let dim = graph.dim();
    step(graph.as_mut_slice(), dim);
    Ok(graph)
}

/// Run the relaxation with [`DEFAULT_SEED`], see [`calculate_seeded`].
pub fn calculate(n: i32, completed: &mut bool) -> Result<(), ComputationFailure> {
    calculate_seeded(n, DEFAULT_SEED, completed)
}

/// Run the relaxation on an `n`x`n` matrix and set `completed` once it finishes.
///
/// On error `completed` keeps whatever value it had. The matrix is dropped before
/// returning either way.
pub fn calculate_seeded(n: i32, seed: u64, completed: &mut bool) -> Result<(), ComputationFailure> {
    tracing::debug!(n, seed, "relaxation started");
    let graph = relax_seeded(n, seed)?;
    tracing::debug!(n = graph.dim(), "relaxation finished");
    *completed = true;
    Ok(())
}
